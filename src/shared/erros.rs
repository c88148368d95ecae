// src/shared/erros.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::shared_structs::GenericResponse;
use super::validacao::ErroCampo;

/// Erros que as rotas devolvem ao cliente.
#[derive(Error, Debug)]
pub enum ErroApp {
    #[error("Dados inválidos: {}", resumir(.0))]
    Validacao(Vec<ErroCampo>),

    /// Produto apontando para uma categoria que não existe.
    #[error("Categoria com ID {0} não existe. Verifique o ID da categoria.")]
    Referencia(i64),

    #[error("Categoria com ID {0} não encontrada.")]
    CategoriaNaoEncontrada(i64),

    #[error("Produto com ID {0} não encontrado.")]
    ProdutoNaoEncontrado(i64),

    #[error("Erro de banco de dados: {0}")]
    Banco(#[from] sqlx::Error),

    #[error("Erro ao aplicar migrações: {0}")]
    Migracao(#[from] sqlx::migrate::MigrateError),
}

fn resumir(erros: &[ErroCampo]) -> String {
    erros
        .iter()
        .map(|e| format!("{}: {}", e.campo, e.mensagem))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ResponseError for ErroApp {
    fn status_code(&self) -> StatusCode {
        match self {
            ErroApp::Validacao(_) | ErroApp::Referencia(_) => StatusCode::BAD_REQUEST,
            ErroApp::CategoriaNaoEncontrada(_) | ErroApp::ProdutoNaoEncontrado(_) => {
                StatusCode::NOT_FOUND
            }
            ErroApp::Banco(_) | ErroApp::Migracao(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut resposta = HttpResponse::build(self.status_code());
        match self {
            ErroApp::Validacao(erros) => resposta.json(GenericResponse {
                status: "error".to_string(),
                message: "Dados inválidos.".to_string(),
                body: Some(erros),
            }),
            ErroApp::Banco(_) | ErroApp::Migracao(_) => {
                // Detalhes do banco ficam só no log
                tracing::error!(erro = %self, "falha no armazenamento");
                resposta.json(GenericResponse::erro(
                    "Erro interno ao acessar o banco de dados.",
                ))
            }
            _ => resposta.json(GenericResponse::erro(self.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_por_tipo_de_erro() {
        assert_eq!(
            ErroApp::Validacao(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErroApp::Referencia(9).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErroApp::CategoriaNaoEncontrada(1).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErroApp::Banco(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn mensagem_de_validacao_lista_os_campos() {
        let erro = ErroApp::Validacao(vec![
            ErroCampo {
                campo: "sku".to_string(),
                mensagem: "O Atributo SKU é obrigatorio!".to_string(),
            },
            ErroCampo {
                campo: "preco".to_string(),
                mensagem: "O Atributo Preço deve ser preenchido!".to_string(),
            },
        ]);
        let texto = erro.to_string();
        assert!(texto.contains("sku: O Atributo SKU é obrigatorio!"));
        assert!(texto.contains("; preco:"));
    }
}
