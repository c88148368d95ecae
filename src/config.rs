// src/config.rs

//! Configuração lida das variáveis de ambiente na inicialização.

use std::env;

use thiserror::Error;

const BIND_ADDR_PADRAO: &str = "127.0.0.1:8080";
const POOL_PADRAO: u32 = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ErroConfig {
    #[error("{variavel} inválida: '{valor}'")]
    ValorInvalido { variavel: &'static str, valor: String },
}

/// Conexão com o PostgreSQL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigBanco {
    pub url: String,
    pub max_conexoes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endereço e porta do servidor HTTP.
    pub bind_addr: String,
    /// Sem banco configurado o catálogo fica em memória.
    pub banco: Option<ConfigBanco>,
}

impl Config {
    /// Lê `BIND_ADDR`, `DATABASE_URL` e `DATABASE_POOL_SIZE`.
    pub fn from_env() -> Result<Self, ErroConfig> {
        Self::from_lookup(|nome| env::var(nome).ok())
    }

    fn from_lookup(ler: impl Fn(&str) -> Option<String>) -> Result<Self, ErroConfig> {
        let bind_addr = ler("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| BIND_ADDR_PADRAO.to_string());

        let max_conexoes = match ler("DATABASE_POOL_SIZE") {
            Some(valor) => match valor.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ErroConfig::ValorInvalido {
                        variavel: "DATABASE_POOL_SIZE",
                        valor,
                    })
                }
            },
            None => POOL_PADRAO,
        };

        let banco = ler("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .map(|url| ConfigBanco { url, max_conexoes });

        Ok(Config { bind_addr, banco })
    }
}
