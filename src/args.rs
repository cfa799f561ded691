use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use crate::databases::mssql::MssqlDB;
use crate::databases::traits::DBSession;
use crate::login::{Login, LoginFields};

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
#[command(next_line_help = true)]
pub struct Args {
    /// File with SRV, UID, PWD and DB lines
    #[arg(long, short = 'f', env = "TDSPWDFILE", default_value = "PWD")]
    pub pwd_file: PathBuf,

    /// Server as host or host:port, overrides SRV
    #[arg(long, short = 'S')]
    pub server: Option<String>,

    /// User name, overrides UID
    #[arg(long, short = 'U')]
    pub user: Option<String>,

    /// Password, overrides PWD
    #[arg(long, short = 'P')]
    pub password: Option<String>,

    /// Database, overrides DB
    #[arg(long, short = 'D')]
    pub database: Option<String>,

    /// Validate the server certificate instead of trusting it
    #[clap(long, action)]
    pub no_trust_cert: bool,

    /// Log level
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Args {
    pub fn new(pwd_file: impl Into<PathBuf>) -> Self {
        return Args {
            pwd_file: pwd_file.into(),
            server: None,
            user: None,
            password: None,
            database: None,
            no_trust_cert: false,
            log_level: Level::INFO,
        };
    }

    fn overrides(&self) -> LoginFields {
        return LoginFields {
            server: self.server.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
            database: self.database.clone(),
        };
    }

    pub fn login(&self) -> anyhow::Result<Login> {
        let from_file = LoginFields::read_pwd_file(&self.pwd_file)?;
        let login = Login::try_from(from_file.merge(self.overrides()))
            .context("Unable to build login")?;
        return Ok(login);
    }

    pub fn create_session(&self) -> anyhow::Result<Box<dyn DBSession>> {
        let login = self.login()?;
        let db = MssqlDB::new(&login, !self.no_trust_cert)
            .context("Unable to connect to the mssql")?;
        return Ok(Box::new(db));
    }
}
