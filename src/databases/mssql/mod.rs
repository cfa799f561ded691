use anyhow::Context;
use tiberius::{AuthMethod, Client, Config};
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};
use tracing::debug;

use crate::databases::table::{Row, Value};
use crate::databases::traits::DBSession;
use crate::login::Login;

mod value;

type MssqlClient = Client<Compat<TcpStream>>;

/// SQL Server session. The driver is async, so the session drives it on its
/// own single-threaded runtime.
pub struct MssqlDB {
    runtime: Runtime,
    client: MssqlClient,
}

impl MssqlDB {
    pub fn new(login: &Login, trust_cert: bool) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Unable to start the runtime for mssql client")?;
        let config = Self::config(login, trust_cert);
        let client = runtime.block_on(Self::connect(config))?;
        debug!(
            "Connected to mssql {}:{} as {}",
            login.server.host, login.server.port, login.user
        );
        return Ok(Self { runtime, client });
    }

    fn config(login: &Login, trust_cert: bool) -> Config {
        let mut config = Config::new();
        config.host(&login.server.host);
        config.port(login.server.port);
        config.authentication(AuthMethod::sql_server(&login.user, &login.password));
        if let Some(database) = &login.database {
            config.database(database);
        }
        if trust_cert {
            config.trust_cert();
        }
        return config;
    }

    async fn connect(config: Config) -> tiberius::Result<MssqlClient> {
        let tcp = TcpStream::connect(config.get_addr()).await?;
        tcp.set_nodelay(true)?;
        return Client::connect(config, tcp.compat_write()).await;
    }
}

impl TryFrom<tiberius::Row> for Row {
    type Error = anyhow::Error;

    fn try_from(value: tiberius::Row) -> Result<Self, Self::Error> {
        let names: Vec<String> = value
            .columns()
            .iter()
            .map(|column| column.name().to_owned())
            .collect();
        let mut row = Row::new();
        for (name, data) in std::iter::zip(names, value) {
            let parsed = Value::try_from((name.as_str(), data))?;
            row.push(name, parsed);
        }
        return Ok(row);
    }
}

impl DBSession for MssqlDB {
    fn execute_batch(&mut self, query: &str) -> anyhow::Result<()> {
        let client = &mut self.client;
        self.runtime
            .block_on(async move { client.simple_query(query).await?.into_results().await })
            .context("Failed to execute batch on mssql")?;
        return Ok(());
    }

    fn fetch_first(&mut self, query: &str) -> anyhow::Result<Option<Row>> {
        let client = &mut self.client;
        let row = self
            .runtime
            .block_on(async move { client.simple_query(query).await?.into_row().await })
            .context("Failed to get data from mssql")?;
        return row.map(Row::try_from).transpose();
    }
}
