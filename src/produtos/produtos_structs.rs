// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::preco;
use crate::categorias::categoria_structs::Categoria;
use crate::shared::erros::ErroApp;
use crate::shared::validacao::{ErroCampo, Validador};

pub const SKU_MAX: usize = 100;
pub const NOME_PRODUTO_MAX: usize = 150;

/// Referência a uma categoria no corpo da requisição: `{"id": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenciaCategoria {
    pub id: i64,
}

/// Estrutura para receber dados do produto na requisição POST/PUT.
/// Os campos são opcionais para que a ausência vire erro de validação.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NovoProduto {
    pub sku: Option<String>,
    #[serde(rename = "nomeProduto")]
    pub nome_produto: Option<String>,
    pub descricao: Option<String>,
    #[serde(default, deserialize_with = "preco::deserializar_opcional")]
    pub preco: Option<BigDecimal>,
    pub categoria: Option<ReferenciaCategoria>,
}

impl NovoProduto {
    /// Lista todas as regras violadas pelos campos da requisição.
    /// A existência da categoria é verificada pelo armazenamento, não aqui.
    pub fn validar(&self) -> Vec<ErroCampo> {
        let sku = self.sku.as_deref();
        let nome_produto = self.nome_produto.as_deref();
        let mut v = Validador::new();
        v.nao_vazio("sku", sku, "O Atributo SKU é obrigatorio!")
            .tamanho(
                "sku",
                sku,
                1,
                SKU_MAX,
                "O Atributo SKU deve conter no mínimo 1 e no maximo 100 caracteres!",
            )
            .nao_vazio(
                "nomeProduto",
                nome_produto,
                "O Atributo nomeProduto é obrigatorio!",
            )
            .tamanho(
                "nomeProduto",
                nome_produto,
                1,
                NOME_PRODUTO_MAX,
                "O Atributo nomeProduto deve conter no mínimo 1 e no maximo 150 caracteres!",
            )
            .presente(
                "descricao",
                self.descricao.as_ref(),
                "O atributo descrição é obrigatorio",
            )
            .presente(
                "preco",
                self.preco.as_ref(),
                "O Atributo Preço deve ser preenchido!",
            )
            .regra(
                "preco",
                self.preco.as_ref().map_or(true, preco::dentro_dos_limites),
                "O Atributo Preço está fora do intervalo permitido!",
            );
        v.concluir()
    }

    /// Valida e converte nos dados que o armazenamento grava.
    pub fn into_dados(self) -> Result<DadosProduto, ErroApp> {
        let erros = self.validar();
        match (self.sku, self.nome_produto, self.descricao, self.preco) {
            (Some(sku), Some(nome_produto), Some(descricao), Some(preco)) if erros.is_empty() => {
                Ok(DadosProduto {
                    sku,
                    nome_produto,
                    descricao,
                    preco,
                    categoria_id: self.categoria.map(|c| c.id),
                })
            }
            _ => Err(ErroApp::Validacao(erros)),
        }
    }
}

/// Campos de um produto já validados.
#[derive(Debug, Clone, PartialEq)]
pub struct DadosProduto {
    pub sku: String,
    pub nome_produto: String,
    pub descricao: String,
    pub preco: BigDecimal,
    pub categoria_id: Option<i64>,
}

/// Estrutura que representa um produto no banco de dados
/// Deriva FromRow para mapeamento direto de resultados de query SQL
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Produto {
    pub id: i64,
    pub sku: String,
    pub nome_produto: String,
    pub descricao: String,
    pub preco: BigDecimal,
    pub categoria_id: Option<i64>,
}

/// Produto como aparece dentro de uma categoria: sem o campo `categoria`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdutoSemCategoria {
    pub id: i64,
    pub sku: String,
    #[serde(rename = "nomeProduto")]
    pub nome_produto: String,
    pub descricao: String,
    #[serde(
        serialize_with = "preco::serializar",
        deserialize_with = "preco::deserializar"
    )]
    pub preco: BigDecimal,
}

impl From<Produto> for ProdutoSemCategoria {
    fn from(p: Produto) -> Self {
        ProdutoSemCategoria {
            id: p.id,
            sku: p.sku,
            nome_produto: p.nome_produto,
            descricao: p.descricao,
            preco: p.preco,
        }
    }
}

/// Estrutura para a resposta da API ao buscar produtos.
/// A categoria vem sem a lista de produtos dela.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProdutoResponse {
    pub id: i64,
    pub sku: String,
    #[serde(rename = "nomeProduto")]
    pub nome_produto: String,
    pub descricao: String,
    #[serde(
        serialize_with = "preco::serializar",
        deserialize_with = "preco::deserializar"
    )]
    pub preco: BigDecimal,
    pub categoria: Option<Categoria>,
}

impl ProdutoResponse {
    pub fn montar(produto: Produto, categoria: Option<Categoria>) -> Self {
        ProdutoResponse {
            id: produto.id,
            sku: produto.sku,
            nome_produto: produto.nome_produto,
            descricao: produto.descricao,
            preco: produto.preco,
            categoria,
        }
    }
}
