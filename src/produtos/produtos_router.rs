// src/produtos/produtos_router.rs

use std::collections::HashMap;

use actix_web::{delete, get, post, put, web, HttpResponse};
use tracing::{info, warn};

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_structs::{NovoProduto, Produto, ProdutoResponse};

use crate::repositorio::CatalogoRepositorio;
use crate::shared::erros::ErroApp;
use crate::shared::shared_structs::GenericResponse;

// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;

/// Anexa a cada produto a sua categoria (sem a lista de produtos dela).
async fn montar_respostas(
    repositorio: &dyn CatalogoRepositorio,
    produtos: Vec<Produto>,
) -> Result<Vec<ProdutoResponse>, ErroApp> {
    let categorias: HashMap<_, _> = repositorio
        .listar_categorias()
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();

    Ok(produtos
        .into_iter()
        .map(|produto| {
            let categoria = produto
                .categoria_id
                .and_then(|id| categorias.get(&id).cloned());
            ProdutoResponse::montar(produto, categoria)
        })
        .collect())
}

async fn montar_resposta(
    repositorio: &dyn CatalogoRepositorio,
    produto: Produto,
) -> Result<ProdutoResponse, ErroApp> {
    let categoria = match produto.categoria_id {
        Some(id) => repositorio.buscar_categoria(id).await?,
        None => None,
    };
    Ok(ProdutoResponse::montar(produto, categoria))
}

/// Rota para buscar todos os produtos.
#[get("/produtos")]
pub async fn buscar_produtos(data: web::Data<AppState>) -> Result<HttpResponse, ErroApp> {
    let produtos = data.repositorio.listar_produtos().await?;
    let body = montar_respostas(data.repositorio.as_ref(), produtos).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        "Produtos listados com sucesso!",
        body,
    )))
}

/// Rota para buscar um produto por ID.
#[get("/produtos/{id}")]
pub async fn buscar_produto_por_id(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ErroApp> {
    let id = path.into_inner();
    let produto = data
        .repositorio
        .buscar_produto(id)
        .await?
        .ok_or(ErroApp::ProdutoNaoEncontrado(id))?;
    let body = montar_resposta(data.repositorio.as_ref(), produto).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Produto com ID {} encontrado.", id),
        body,
    )))
}

/// Rota para buscar produtos pelo nomeProduto (trecho, sem diferenciar maiúsculas).
#[get("/produtos/nome/{nome}")]
pub async fn buscar_produtos_por_nome(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ErroApp> {
    let nome = path.into_inner();
    let produtos = data.repositorio.buscar_produtos_por_nome(&nome).await?;
    let body = montar_respostas(data.repositorio.as_ref(), produtos).await?;

    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("{} produto(s) encontrado(s) para '{}'.", body.len(), nome),
        body,
    )))
}

/// Rota para inserir um novo produto.
///
/// Recebe os dados do novo produto via JSON no corpo da requisição.
/// A validação dos campos acontece antes de qualquer acesso ao banco;
/// uma categoria inexistente é recusada pelo armazenamento.
#[post("/produtos")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ErroApp> {
    let dados = item.into_inner().into_dados().map_err(|e| {
        warn!(erro = %e, "produto rejeitado");
        e
    })?;

    let produto = data.repositorio.inserir_produto(&dados).await.map_err(|e| {
        warn!(erro = %e, "falha ao cadastrar produto");
        e
    })?;
    info!(id = produto.id, sku = %produto.sku, "produto cadastrado");

    let id = produto.id;
    let body = montar_resposta(data.repositorio.as_ref(), produto).await?;
    Ok(HttpResponse::Created().json(GenericResponse::sucesso(
        format!("Produto cadastrado com sucesso! ID: {}", id),
        body,
    )))
}

/// Rota para atualizar um produto existente (todos os campos).
#[put("/produtos/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    item: web::Json<NovoProduto>,
) -> Result<HttpResponse, ErroApp> {
    let id = path.into_inner();
    let dados = item.into_inner().into_dados().map_err(|e| {
        warn!(id, erro = %e, "atualização de produto rejeitada");
        e
    })?;

    let produto = data
        .repositorio
        .atualizar_produto(id, &dados)
        .await?
        .ok_or(ErroApp::ProdutoNaoEncontrado(id))?;
    info!(id, "produto atualizado");

    let body = montar_resposta(data.repositorio.as_ref(), produto).await?;
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso(
        format!("Produto com ID {} atualizado com sucesso.", id),
        body,
    )))
}

/// Rota para deletar um produto.
#[delete("/produtos/{id}")]
pub async fn deletar_produto(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ErroApp> {
    let id = path.into_inner();
    if !data.repositorio.deletar_produto(id).await? {
        return Err(ErroApp::ProdutoNaoEncontrado(id));
    }
    info!(id, "produto deletado");

    Ok(HttpResponse::Ok().json(GenericResponse::ok(format!(
        "Produto com ID {} deletado com sucesso.",
        id
    ))))
}
