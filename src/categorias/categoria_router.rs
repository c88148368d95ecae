// src/categorias/categoria_router.rs

use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::{info, warn};

// Importa as structs de categoria
use super::categoria_structs::{Categoria, CategoriaResponse, NovaCategoria};

use crate::produtos::produtos_structs::Produto;
use crate::repositorio::CatalogoRepositorio;
use crate::shared::erros::ErroApp;
use crate::shared::shared_structs::GenericResponse;

// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;

/// Junta a cada categoria os produtos dela, com uma única leitura de produtos.
async fn montar_respostas(
    repositorio: &dyn CatalogoRepositorio,
    categorias: Vec<Categoria>,
) -> Result<Vec<CategoriaResponse>, ErroApp> {
    let mut por_categoria: HashMap<i64, Vec<Produto>> = HashMap::new();
    for produto in repositorio.listar_produtos().await? {
        if let Some(categoria_id) = produto.categoria_id {
            por_categoria.entry(categoria_id).or_default().push(produto);
        }
    }

    Ok(categorias
        .into_iter()
        .map(|categoria| {
            let produtos = por_categoria.remove(&categoria.id).unwrap_or_default();
            CategoriaResponse::montar(categoria, produtos)
        })
        .collect())
}

/// Rota para cadastrar uma nova categoria.
#[post("/categorias")]
pub async fn cadastrar_categoria(
    data: web::Data<AppState>,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ErroApp> {
    let dados = item.into_inner().into_dados().map_err(|e| {
        warn!(erro = %e, "categoria rejeitada");
        e
    })?;

    let categoria = data.repositorio.inserir_categoria(&dados).await?;
    info!(id = categoria.id, nome = %categoria.nome, "categoria cadastrada");

    Ok(HttpResponse::Created().json(GenericResponse::sucesso(
        format!("Categoria cadastrada com sucesso! ID: {}", categoria.id),
        CategoriaResponse::montar(categoria, Vec::new()),
    )))
}

/// Rota para buscar todas as categorias, cada uma com seus produtos.
#[get("/categorias")]
pub async fn buscar_categorias(data: web::Data<AppState>) -> Result<HttpResponse, ErroApp> {
    let categorias = data.repositorio.listar_categorias().await?;
    let body = montar_respostas(data.repositorio.as_ref(), categorias).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Categorias listadas com sucesso!",
        body,
    )))
}

/// Rota para buscar uma categoria por ID.
#[get("/categorias/{id}")]
pub async fn buscar_categoria_por_id(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ErroApp> {
    let id = path.into_inner();
    let categoria = data
        .repositorio
        .buscar_categoria(id)
        .await?
        .ok_or(ErroApp::CategoriaNaoEncontrada(id))?;
    let produtos = data.repositorio.produtos_da_categoria(id).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Categoria com ID {} encontrada.", id),
        CategoriaResponse::montar(categoria, produtos),
    )))
}

/// Rota para buscar categorias pelo nome (trecho, sem diferenciar maiúsculas).
#[get("/categorias/nome/{nome}")]
pub async fn buscar_categorias_por_nome(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ErroApp> {
    let nome = path.into_inner();
    let categorias = data.repositorio.buscar_categorias_por_nome(&nome).await?;
    let body = montar_respostas(data.repositorio.as_ref(), categorias).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("{} categoria(s) encontrada(s) para '{}'.", body.len(), nome),
        body,
    )))
}

/// Rota para atualizar uma categoria existente.
#[put("/categorias/{id}")]
pub async fn atualizar_categoria(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    item: web::Json<NovaCategoria>,
) -> Result<HttpResponse, ErroApp> {
    let id = path.into_inner();
    let dados = item.into_inner().into_dados().map_err(|e| {
        warn!(id, erro = %e, "atualização de categoria rejeitada");
        e
    })?;

    let categoria = data
        .repositorio
        .atualizar_categoria(id, &dados)
        .await?
        .ok_or(ErroApp::CategoriaNaoEncontrada(id))?;
    let produtos = data.repositorio.produtos_da_categoria(id).await?;
    info!(id, "categoria atualizada");

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Categoria com ID {} atualizada com sucesso.", id),
        CategoriaResponse::montar(categoria, produtos),
    )))
}

/// Rota para deletar uma categoria. Os produtos dela são removidos junto.
#[delete("/categorias/{id}")]
pub async fn deletar_categoria(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ErroApp> {
    let id = path.into_inner();
    let removidos = data
        .repositorio
        .deletar_categoria(id)
        .await?
        .ok_or(ErroApp::CategoriaNaoEncontrada(id))?;
    info!(id, produtos_removidos = removidos, "categoria deletada");

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!(
            "Categoria com ID {} deletada com sucesso. Produtos removidos: {}.",
            id, removidos
        ),
        serde_json::json!({ "produtosRemovidos": removidos }),
    )))
}
