// src/shared/validacao.rs

use serde::Serialize;

/// Violação de uma regra em um campo da requisição.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErroCampo {
    pub campo: String,
    pub mensagem: String,
}

/// Acumula as violações encontradas nos campos de uma entidade.
/// Todas as regras são avaliadas, mesmo depois da primeira falha.
#[derive(Debug, Default)]
pub struct Validador {
    erros: Vec<ErroCampo>,
}

impl Validador {
    pub fn new() -> Self {
        Self::default()
    }

    /// O texto deve existir e conter algo além de espaços.
    pub fn nao_vazio(&mut self, campo: &str, valor: Option<&str>, mensagem: &str) -> &mut Self {
        if valor.map_or(true, |v| v.trim().is_empty()) {
            self.registrar(campo, mensagem);
        }
        self
    }

    /// Tamanho em caracteres dentro de [min, max]. Valor ausente passa.
    pub fn tamanho(
        &mut self,
        campo: &str,
        valor: Option<&str>,
        min: usize,
        max: usize,
        mensagem: &str,
    ) -> &mut Self {
        if let Some(v) = valor {
            let n = v.chars().count();
            if n < min || n > max {
                self.registrar(campo, mensagem);
            }
        }
        self
    }

    /// O valor deve existir (texto em branco é aceito).
    pub fn presente<T>(&mut self, campo: &str, valor: Option<&T>, mensagem: &str) -> &mut Self {
        if valor.is_none() {
            self.registrar(campo, mensagem);
        }
        self
    }

    /// Regra livre: registra a mensagem quando `valido` é falso.
    pub fn regra(&mut self, campo: &str, valido: bool, mensagem: &str) -> &mut Self {
        if !valido {
            self.registrar(campo, mensagem);
        }
        self
    }

    pub fn concluir(self) -> Vec<ErroCampo> {
        self.erros
    }

    fn registrar(&mut self, campo: &str, mensagem: &str) {
        self.erros.push(ErroCampo {
            campo: campo.to_string(),
            mensagem: mensagem.to_string(),
        });
    }
}
