use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "ieam-admin", version, about = "IEAM admin dashboard")]
pub struct CliArgs {
    /// Print dashboard stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the public site export and exit (defaults to SITE_EXPORT or site.json)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Override log file path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if let Some(Some(path)) = &self.export {
            std::env::set_var("SITE_EXPORT", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub const fn wants_export(&self) -> bool {
        self.export.is_some()
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_flag_accepts_optional_path() -> Result<(), clap::Error> {
        let args = CliArgs::try_parse_from(["ieam-admin", "--export"])?;
        assert!(args.wants_export());
        assert_eq!(args.export, Some(None));

        let args = CliArgs::try_parse_from(["ieam-admin", "--export", "public/site.json"])?;
        assert_eq!(args.export, Some(Some(PathBuf::from("public/site.json"))));

        let args = CliArgs::parse_from(["ieam-admin", "--headless", "--json"]);
        assert!(args.headless && args.json && !args.wants_export());
        Ok(())
    }
}
