use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::logging::LoggingConfig;

/// Default input file read when no path is given.
pub const DEFAULT_INPUT: &str = "shapes.txt";

/// Drawer configuration.
#[derive(Debug, Clone)]
pub struct DrawerConfig {
    pub input: PathBuf,
    pub logging: LoggingConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            logging: LoggingConfig::default(),
        }
    }
}

impl DrawerConfig {
    /// Builds a config from command-line arguments (program name excluded).
    ///
    /// `[-v|--verbose] [-q|--quiet] [--color=auto|always|never] [FILE]`
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut input = None;

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "-v" | "--verbose" => config.logging.env_filter = Some("debug".to_string()),
                "-q" | "--quiet"   => config.logging.env_filter = Some("error".to_string()),
                a if a.starts_with("--color=") => {
                    config.logging.write_style = match &a["--color=".len()..] {
                        "auto"   => env_logger::WriteStyle::Auto,
                        "always" => env_logger::WriteStyle::Always,
                        "never"  => env_logger::WriteStyle::Never,
                        other    => bail!("invalid --color value {:?}", other),
                    };
                }
                a if a.starts_with('-') && a != "-" => bail!("unknown option {:?}", a),
                _ => {
                    if input.replace(PathBuf::from(&arg)).is_some() {
                        bail!("more than one input file given");
                    }
                }
            }
        }

        if let Some(input) = input {
            config.input = input;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(a: &[&str]) -> Result<DrawerConfig> {
        DrawerConfig::from_args(a.iter().copied())
    }

    #[test]
    fn defaults_to_shapes_txt() {
        let c = args(&[]).unwrap();
        assert_eq!(c.input, PathBuf::from("shapes.txt"));
        assert!(c.logging.env_filter.is_none());
    }

    #[test]
    fn positional_path() {
        assert_eq!(args(&["in/other.txt"]).unwrap().input, PathBuf::from("in/other.txt"));
    }

    #[test]
    fn verbosity_flags() {
        assert_eq!(args(&["-v"]).unwrap().logging.env_filter.as_deref(), Some("debug"));
        assert_eq!(args(&["--quiet"]).unwrap().logging.env_filter.as_deref(), Some("error"));
    }

    #[test]
    fn color_flag() {
        let c = args(&["--color=never", "x.txt"]).unwrap();
        assert_eq!(c.logging.write_style, env_logger::WriteStyle::Never);
        assert!(args(&["--color=sometimes"]).is_err());
    }

    #[test]
    fn rejects_unknown_option_and_extra_files() {
        assert!(args(&["--frobnicate"]).is_err());
        assert!(args(&["a.txt", "b.txt"]).is_err());
    }
}
