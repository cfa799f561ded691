use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use tracing::debug;

use crate::error::Error;

pub const DEFAULT_PORT: u16 = 1433;

#[derive(Clone, Debug, PartialEq)]
pub struct ServerAddress {
    pub host: String,
    pub port: u16,
}

impl FromStr for ServerAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<ServerAddress, Self::Err> {
        let s = s.trim();
        let (host, port) = match s.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse()
                    .map_err(|_| Error::InvalidServer(s.to_owned()))?;
                (host, port)
            }
            None => (s, DEFAULT_PORT),
        };
        if host.is_empty() {
            return Err(Error::InvalidServer(s.to_owned()));
        }
        return Ok(ServerAddress {
            host: host.to_owned(),
            port,
        });
    }
}

/// Login values collected from one source, any of them may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFields {
    pub server: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl LoginFields {
    /// Parses `KEY=value` lines of a PWD file. Only SRV, UID, PWD and DB are
    /// used, everything else is skipped.
    pub fn parse_pwd(content: &str) -> Self {
        let mut fields = LoginFields::default();
        for line in content.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim_end_matches('\r');
            if value.is_empty() {
                continue;
            }
            let slot = match key {
                "SRV" => &mut fields.server,
                "UID" => &mut fields.user,
                "PWD" => &mut fields.password,
                "DB" => &mut fields.database,
                _ => continue,
            };
            *slot = Some(value.to_owned());
        }
        return fields;
    }

    /// Reads a PWD file. A missing file gives empty fields, so the command
    /// line alone can carry the login.
    pub fn read_pwd_file(path: &Path) -> anyhow::Result<Self> {
        return match std::fs::read_to_string(path) {
            Ok(content) => {
                debug!("Read login info from {}", path.display());
                Ok(Self::parse_pwd(&content))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("PWD file {} not found", path.display());
                Ok(Self::default())
            }
            Err(err) => {
                Err(err).with_context(|| format!("Unable to read PWD file {}", path.display()))
            }
        };
    }

    /// Values set in `overrides` replace the ones in `self`.
    pub fn merge(self, overrides: LoginFields) -> LoginFields {
        return LoginFields {
            server: overrides.server.or(self.server),
            user: overrides.user.or(self.user),
            password: overrides.password.or(self.password),
            database: overrides.database.or(self.database),
        };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Login {
    pub server: ServerAddress,
    pub user: String,
    pub password: String,
    pub database: Option<String>,
}

impl TryFrom<LoginFields> for Login {
    type Error = Error;

    fn try_from(fields: LoginFields) -> Result<Self, Self::Error> {
        let server = fields
            .server
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingLogin("SRV"))?;
        let user = fields
            .user
            .filter(|s| !s.is_empty())
            .ok_or(Error::MissingLogin("UID"))?;
        return Ok(Login {
            server: server.parse()?,
            user,
            password: fields.password.unwrap_or_default(),
            database: fields.database.filter(|s| !s.is_empty()),
        });
    }
}
