use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mysql_host: String,
    pub mysql_port: u16,
    pub mysql_user: String,
    pub mysql_password: String,
    pub mysql_dbname: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            mysql_host: required("MYSQL_HOST")?,
            mysql_port: env::var("MYSQL_PORT")
                .unwrap_or_else(|_| "3306".into())
                .parse()?,
            mysql_user: required("MYSQL_USER")?,
            mysql_password: required("MYSQL_PASSWORD")?,
            mysql_dbname: required("MYSQL_DBNAME")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3030".into())
                .parse()?,
        })
    }

    pub fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.mysql_user, self.mysql_password, self.mysql_host, self.mysql_port, self.mysql_dbname
        )
    }
}

fn required(key: &str) -> anyhow::Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("Missing required env var: {}", key))
}
