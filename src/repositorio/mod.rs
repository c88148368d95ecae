// src/repositorio/mod.rs

//! Acesso ao armazenamento do catálogo.
//!
//! As rotas só conhecem [`CatalogoRepositorio`]. Há duas implementações:
//!
//! - [`PgCatalogo`] - PostgreSQL via sqlx, usada quando `DATABASE_URL` existe
//! - [`MemoriaCatalogo`] - mapas em memória, usada sem banco e nos testes
//!
//! As duas garantem as mesmas regras de relacionamento: um produto só aponta
//! para categoria existente e remover uma categoria remove os produtos dela.

use async_trait::async_trait;

use crate::categorias::categoria_structs::{Categoria, DadosCategoria};
use crate::produtos::produtos_structs::{DadosProduto, Produto};
use crate::shared::erros::ErroApp;

pub mod memoria;
pub mod postgres;

pub use memoria::MemoriaCatalogo;
pub use postgres::PgCatalogo;

#[async_trait]
pub trait CatalogoRepositorio: Send + Sync {
    async fn inserir_categoria(&self, dados: &DadosCategoria) -> Result<Categoria, ErroApp>;

    /// Todas as categorias, ordenadas por id.
    async fn listar_categorias(&self) -> Result<Vec<Categoria>, ErroApp>;

    async fn buscar_categoria(&self, id: i64) -> Result<Option<Categoria>, ErroApp>;

    /// Categorias cujo nome contém o trecho, sem diferenciar maiúsculas.
    async fn buscar_categorias_por_nome(&self, trecho: &str) -> Result<Vec<Categoria>, ErroApp>;

    /// Substitui todos os campos. `None` quando o id não existe.
    async fn atualizar_categoria(
        &self,
        id: i64,
        dados: &DadosCategoria,
    ) -> Result<Option<Categoria>, ErroApp>;

    /// Remove a categoria e os produtos dela.
    /// Devolve quantos produtos foram removidos, ou `None` se o id não existe.
    async fn deletar_categoria(&self, id: i64) -> Result<Option<u64>, ErroApp>;

    /// Falha com [`ErroApp::Referencia`] se a categoria informada não existe.
    async fn inserir_produto(&self, dados: &DadosProduto) -> Result<Produto, ErroApp>;

    /// Todos os produtos, ordenados por id.
    async fn listar_produtos(&self) -> Result<Vec<Produto>, ErroApp>;

    async fn buscar_produto(&self, id: i64) -> Result<Option<Produto>, ErroApp>;

    /// Produtos cujo nomeProduto contém o trecho, sem diferenciar maiúsculas.
    async fn buscar_produtos_por_nome(&self, trecho: &str) -> Result<Vec<Produto>, ErroApp>;

    /// Produtos que apontam para a categoria, ordenados por id.
    async fn produtos_da_categoria(&self, categoria_id: i64) -> Result<Vec<Produto>, ErroApp>;

    /// Substitui todos os campos. `None` quando o id não existe.
    /// Falha com [`ErroApp::Referencia`] se a categoria informada não existe.
    async fn atualizar_produto(
        &self,
        id: i64,
        dados: &DadosProduto,
    ) -> Result<Option<Produto>, ErroApp>;

    /// `false` quando o id não existe.
    async fn deletar_produto(&self, id: i64) -> Result<bool, ErroApp>;
}
