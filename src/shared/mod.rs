// src/shared/mod.rs

// Envelope padrão das respostas da API
pub mod shared_structs;
// Erros da aplicação e o mapeamento para respostas HTTP
pub mod erros;
// Regras de validação de campos
pub mod validacao;
