use std::path::PathBuf;

use clap::Parser;

/// ProfileKit: hosts the profile editor page in a native window.
#[derive(Parser, Debug)]
#[command(name = "profilekit", version, about)]
pub struct Args {
    /// Page to load instead of `page.url` from the config.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Image sent to the page whenever it asks for a profile picture.
    #[arg(long, value_name = "FILE")]
    pub profile_image: Option<PathBuf>,

    /// Log filter override (e.g. `profilekit=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable the web inspector regardless of config.
    #[arg(long)]
    pub inspect: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_config() {
        let args = Args::try_parse_from(["profilekit"]).unwrap();
        assert!(args.url.is_none());
        assert!(args.config.is_none());
        assert!(args.profile_image.is_none());
        assert!(!args.inspect);
        assert!(!args.print_config);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "profilekit",
            "-u",
            "https://profile.example.com/edit",
            "--config",
            "/etc/profilekit.toml",
            "--profile-image",
            "avatar.jpg",
            "--log-level",
            "profilekit=debug",
            "--inspect",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("https://profile.example.com/edit"));
        assert_eq!(args.config, Some(PathBuf::from("/etc/profilekit.toml")));
        assert_eq!(args.profile_image, Some(PathBuf::from("avatar.jpg")));
        assert_eq!(args.log_level.as_deref(), Some("profilekit=debug"));
        assert!(args.inspect);
    }

    #[test]
    fn print_config_flag() {
        let args = Args::try_parse_from(["profilekit", "--print-config"]).unwrap();
        assert!(args.print_config);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["profilekit", "--camera"]).is_err());
    }
}
