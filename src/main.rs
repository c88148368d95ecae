// src/main.rs

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use farmacia::config::Config;
use farmacia::repositorio::{CatalogoRepositorio, MemoriaCatalogo, PgCatalogo};
use farmacia::{configurar_rotas, rota_nao_encontrada, AppState};

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Filtro de log vem de RUST_LOG; padrão "info"
    let filtro = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filtro).init();

    let config = Config::from_env().map_err(|e| {
        error!("configuração inválida: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    // Com DATABASE_URL o catálogo vai para o PostgreSQL; sem ela fica em memória.
    let repositorio: Arc<dyn CatalogoRepositorio> = match &config.banco {
        Some(banco) => {
            let catalogo = PgCatalogo::conectar(banco).await.map_err(|e| {
                error!("falha ao preparar o banco PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;
            Arc::new(catalogo)
        }
        None => {
            info!("DATABASE_URL não definida; usando catálogo em memória");
            Arc::new(MemoriaCatalogo::new())
        }
    };

    // web::Data é usado para compartilhar o estado entre as rotas.
    let app_state = web::Data::new(AppState::new(repositorio));

    info!(endereco = %config.bind_addr, "iniciando API Farmácia");

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            // .clone() é necessário porque a closure é movida
            // e pode ser executada várias vezes.
            .app_data(app_state.clone())
            .configure(configurar_rotas)
            .default_service(web::to(rota_nao_encontrada))
    })
    // Vincula o servidor ao endereço configurado. O '?' propaga erros.
    .bind(&config.bind_addr)?
    .run()
    .await
}
