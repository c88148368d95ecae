// src/categorias/categoria_structs.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::produtos::produtos_structs::{Produto, ProdutoSemCategoria};
use crate::shared::erros::ErroApp;
use crate::shared::validacao::{ErroCampo, Validador};

pub const NOME_MAX: usize = 100;

/// Estrutura para receber dados de uma categoria na requisição POST/PUT.
/// Os campos são opcionais para que a ausência vire erro de validação.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NovaCategoria {
    pub nome: Option<String>,
    pub descricao: Option<String>,
}

impl NovaCategoria {
    /// Lista todas as regras violadas pelos campos da requisição.
    pub fn validar(&self) -> Vec<ErroCampo> {
        let nome = self.nome.as_deref();
        let mut v = Validador::new();
        v.nao_vazio("nome", nome, "O atributo nome é obrigatorio!")
            .tamanho(
                "nome",
                nome,
                1,
                NOME_MAX,
                "O atributo Nome deve conter no mínimo 1 e no maximo 100 caracteres!",
            )
            .presente(
                "descricao",
                self.descricao.as_ref(),
                "O atributo descrição é obrigatorio",
            );
        v.concluir()
    }

    /// Valida e converte nos dados que o armazenamento grava.
    pub fn into_dados(self) -> Result<DadosCategoria, ErroApp> {
        let erros = self.validar();
        match (self.nome, self.descricao) {
            (Some(nome), Some(descricao)) if erros.is_empty() => {
                Ok(DadosCategoria { nome, descricao })
            }
            _ => Err(ErroApp::Validacao(erros)),
        }
    }
}

/// Campos de uma categoria já validados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DadosCategoria {
    pub nome: String,
    pub descricao: String,
}

/// Estrutura que representa uma categoria no banco de dados.
/// Também é a forma serializada dentro de um produto (sem a lista de produtos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Categoria {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
}

/// Resposta da API para uma categoria, com os produtos dela.
/// Cada produto vem sem a referência de volta para a categoria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriaResponse {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub produto: Vec<ProdutoSemCategoria>,
}

impl CategoriaResponse {
    pub fn montar(categoria: Categoria, produtos: Vec<Produto>) -> Self {
        CategoriaResponse {
            id: categoria.id,
            nome: categoria.nome,
            descricao: categoria.descricao,
            produto: produtos.into_iter().map(ProdutoSemCategoria::from).collect(),
        }
    }
}
