use {
    crate::{error::AppError, session::Session},
    std::path::PathBuf,
};

/// Preview server settings, read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub public_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub session: Session,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            public_dir: PathBuf::from("public"),
            assets_dir: PathBuf::from("assets"),
            session: Session::simulated(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to [`Config::default`] for
    /// anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse()?,
            None => defaults.port,
        };
        let authenticated = match lookup("SIMULATE_AUTH") {
            Some(flag) => parse_flag("SIMULATE_AUTH", &flag)?,
            None => defaults.session.authenticated,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            public_dir: lookup("PUBLIC_DIR")
                .map_or(defaults.public_dir, PathBuf::from),
            assets_dir: lookup("ASSETS_DIR")
                .map_or(defaults.assets_dir, PathBuf::from),
            session: Session { authenticated },
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::collections::HashMap};

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert!(config.session.authenticated);
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("PUBLIC_DIR", "static"),
            ("ASSETS_DIR", "dist/assets"),
            ("SIMULATE_AUTH", "no"),
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:3000");
        assert_eq!(config.public_dir, PathBuf::from("static"));
        assert_eq!(config.assets_dir, PathBuf::from("dist/assets"));
        assert_eq!(config.session, Session::anonymous());
    }

    #[test]
    fn bad_port_is_rejected() {
        assert!(matches!(
            config(&[("PORT", "eighty")]),
            Err(AppError::Port(_))
        ));
        assert!(matches!(
            config(&[("PORT", "70000")]),
            Err(AppError::Port(_))
        ));
    }

    #[test]
    fn auth_flag_accepts_common_spellings() {
        assert!(
            config(&[("SIMULATE_AUTH", "TRUE")])
                .unwrap()
                .session
                .authenticated
        );
        assert!(
            !config(&[("SIMULATE_AUTH", "0")])
                .unwrap()
                .session
                .authenticated
        );
        assert!(matches!(
            config(&[("SIMULATE_AUTH", "maybe")]),
            Err(AppError::Config(_))
        ));
    }
}
