use tds_null_check::databases::mssql::MssqlDB;
use tds_null_check::login::{Login, ServerAddress};
use testcontainers::{Container, runners::SyncRunner};
use testcontainers_modules::mssql_server::MssqlServer;

pub struct TestMssqlDatabase {
    pub login: Login,
    pub session: MssqlDB,
    container: Container<MssqlServer>,
}

impl TestMssqlDatabase {
    pub fn new() -> Self {
        let container = MssqlServer::default().with_accept_eula().start().unwrap();

        let login = Login {
            server: ServerAddress {
                host: container.get_host().unwrap().to_string(),
                port: container.get_host_port_ipv4(1433).unwrap(),
            },
            user: "sa".to_owned(),
            password: MssqlServer::DEFAULT_SA_PASSWORD.to_owned(),
            database: None,
        };
        let session = MssqlDB::new(&login, true).expect("Unable to connect to test mssql");

        return Self {
            login,
            session,
            container,
        };
    }
}
