// src/lib.rs

use std::sync::Arc;

use actix_web::{error, web, HttpRequest, HttpResponse};

// Importa os módulos
pub mod categorias; // Módulo de categorias
pub mod config; // Configuração via variáveis de ambiente
pub mod produtos; // Módulo de produtos
pub mod repositorio; // Armazenamento (PostgreSQL ou memória)
pub mod shared; // Módulo shared

use repositorio::CatalogoRepositorio;
use shared::shared_structs::GenericResponse;

// Estado compartilhado entre as rotas: o armazenamento do catálogo.
pub struct AppState {
    pub repositorio: Arc<dyn CatalogoRepositorio>,
}

impl AppState {
    pub fn new(repositorio: Arc<dyn CatalogoRepositorio>) -> Self {
        AppState { repositorio }
    }
}

/// Registra as rotas do catálogo e o tratamento de JSON malformado.
/// Usado pelo servidor em `main.rs` e pelos testes.
pub fn configurar_rotas(cfg: &mut web::ServiceConfig) {
    // Corpo que não é JSON válido também responde no formato GenericResponse
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        tracing::warn!(erro = %err, "corpo da requisição inválido");
        let resposta = HttpResponse::BadRequest().json(GenericResponse::erro(format!(
            "Corpo da requisição inválido: {}",
            err
        )));
        error::InternalError::from_response(err, resposta).into()
    });

    // Id que não é número (ex.: /produtos/abc) também responde no formato GenericResponse
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        tracing::warn!(erro = %err, "parâmetro de rota inválido");
        let resposta = HttpResponse::BadRequest().json(GenericResponse::erro(format!(
            "Parâmetro de rota inválido: {}",
            err
        )));
        error::InternalError::from_response(err, resposta).into()
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        // Módulo de Categorias
        .service(categorias::categoria_router::cadastrar_categoria)
        .service(categorias::categoria_router::buscar_categorias)
        .service(categorias::categoria_router::buscar_categorias_por_nome)
        .service(categorias::categoria_router::buscar_categoria_por_id)
        .service(categorias::categoria_router::atualizar_categoria)
        .service(categorias::categoria_router::deletar_categoria)
        // Módulo de Produtos
        .service(produtos::produtos_router::buscar_produtos)
        .service(produtos::produtos_router::buscar_produtos_por_nome)
        .service(produtos::produtos_router::buscar_produto_por_id)
        .service(produtos::produtos_router::cadastrar_produto)
        .service(produtos::produtos_router::atualizar_produto)
        .service(produtos::produtos_router::deletar_produto);
}

/// Resposta para caminhos sem rota; registrada com `App::default_service`.
pub async fn rota_nao_encontrada(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(GenericResponse::erro(format!(
        "Rota {} {} não encontrada.",
        req.method(),
        req.path()
    )))
}
