// src/repositorio/memoria.rs

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use super::CatalogoRepositorio;
use crate::categorias::categoria_structs::{Categoria, DadosCategoria};
use crate::produtos::produtos_structs::{DadosProduto, Produto};
use crate::shared::erros::ErroApp;

#[derive(Default)]
struct Estado {
    categorias: BTreeMap<i64, Categoria>,
    produtos: BTreeMap<i64, Produto>,
    ultimo_id_categoria: i64,
    ultimo_id_produto: i64,
}

impl Estado {
    fn verificar_categoria(&self, categoria_id: Option<i64>) -> Result<(), ErroApp> {
        match categoria_id {
            Some(id) if !self.categorias.contains_key(&id) => Err(ErroApp::Referencia(id)),
            _ => Ok(()),
        }
    }
}

/// Catálogo mantido em memória.
/// RwLock permite múltiplos leitores ou um único escritor; cada operação
/// segura o lock uma única vez, então é atômica.
#[derive(Default)]
pub struct MemoriaCatalogo {
    estado: RwLock<Estado>,
}

impl MemoriaCatalogo {
    pub fn new() -> Self {
        Self::default()
    }

    fn ler(&self) -> RwLockReadGuard<'_, Estado> {
        self.estado.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn escrever(&self) -> RwLockWriteGuard<'_, Estado> {
        self.estado.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn contem(texto: &str, trecho: &str) -> bool {
    texto.to_lowercase().contains(&trecho.to_lowercase())
}

#[async_trait]
impl CatalogoRepositorio for MemoriaCatalogo {
    async fn inserir_categoria(&self, dados: &DadosCategoria) -> Result<Categoria, ErroApp> {
        let mut estado = self.escrever();
        estado.ultimo_id_categoria += 1;
        let categoria = Categoria {
            id: estado.ultimo_id_categoria,
            nome: dados.nome.clone(),
            descricao: dados.descricao.clone(),
        };
        estado.categorias.insert(categoria.id, categoria.clone());
        Ok(categoria)
    }

    async fn listar_categorias(&self) -> Result<Vec<Categoria>, ErroApp> {
        Ok(self.ler().categorias.values().cloned().collect())
    }

    async fn buscar_categoria(&self, id: i64) -> Result<Option<Categoria>, ErroApp> {
        Ok(self.ler().categorias.get(&id).cloned())
    }

    async fn buscar_categorias_por_nome(&self, trecho: &str) -> Result<Vec<Categoria>, ErroApp> {
        Ok(self
            .ler()
            .categorias
            .values()
            .filter(|c| contem(&c.nome, trecho))
            .cloned()
            .collect())
    }

    async fn atualizar_categoria(
        &self,
        id: i64,
        dados: &DadosCategoria,
    ) -> Result<Option<Categoria>, ErroApp> {
        let mut estado = self.escrever();
        Ok(estado.categorias.get_mut(&id).map(|categoria| {
            categoria.nome = dados.nome.clone();
            categoria.descricao = dados.descricao.clone();
            categoria.clone()
        }))
    }

    async fn deletar_categoria(&self, id: i64) -> Result<Option<u64>, ErroApp> {
        let mut estado = self.escrever();
        if estado.categorias.remove(&id).is_none() {
            return Ok(None);
        }
        let antes = estado.produtos.len();
        estado.produtos.retain(|_, p| p.categoria_id != Some(id));
        let removidos = (antes - estado.produtos.len()) as u64;
        debug!(categoria_id = id, removidos, "produtos removidos em cascata");
        Ok(Some(removidos))
    }

    async fn inserir_produto(&self, dados: &DadosProduto) -> Result<Produto, ErroApp> {
        let mut estado = self.escrever();
        estado.verificar_categoria(dados.categoria_id)?;
        estado.ultimo_id_produto += 1;
        let produto = Produto {
            id: estado.ultimo_id_produto,
            sku: dados.sku.clone(),
            nome_produto: dados.nome_produto.clone(),
            descricao: dados.descricao.clone(),
            preco: dados.preco.clone(),
            categoria_id: dados.categoria_id,
        };
        estado.produtos.insert(produto.id, produto.clone());
        Ok(produto)
    }

    async fn listar_produtos(&self) -> Result<Vec<Produto>, ErroApp> {
        Ok(self.ler().produtos.values().cloned().collect())
    }

    async fn buscar_produto(&self, id: i64) -> Result<Option<Produto>, ErroApp> {
        Ok(self.ler().produtos.get(&id).cloned())
    }

    async fn buscar_produtos_por_nome(&self, trecho: &str) -> Result<Vec<Produto>, ErroApp> {
        Ok(self
            .ler()
            .produtos
            .values()
            .filter(|p| contem(&p.nome_produto, trecho))
            .cloned()
            .collect())
    }

    async fn produtos_da_categoria(&self, categoria_id: i64) -> Result<Vec<Produto>, ErroApp> {
        Ok(self
            .ler()
            .produtos
            .values()
            .filter(|p| p.categoria_id == Some(categoria_id))
            .cloned()
            .collect())
    }

    async fn atualizar_produto(
        &self,
        id: i64,
        dados: &DadosProduto,
    ) -> Result<Option<Produto>, ErroApp> {
        let mut estado = self.escrever();
        if !estado.produtos.contains_key(&id) {
            return Ok(None);
        }
        estado.verificar_categoria(dados.categoria_id)?;
        Ok(estado.produtos.get_mut(&id).map(|produto| {
            produto.sku = dados.sku.clone();
            produto.nome_produto = dados.nome_produto.clone();
            produto.descricao = dados.descricao.clone();
            produto.preco = dados.preco.clone();
            produto.categoria_id = dados.categoria_id;
            produto.clone()
        }))
    }

    async fn deletar_produto(&self, id: i64) -> Result<bool, ErroApp> {
        Ok(self.escrever().produtos.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn categoria(nome: &str) -> DadosCategoria {
        DadosCategoria {
            nome: nome.to_string(),
            descricao: "Dor e febre".to_string(),
        }
    }

    fn produto(nome: &str, categoria_id: Option<i64>) -> DadosProduto {
        DadosProduto {
            sku: format!("SKU-{nome}"),
            nome_produto: nome.to_string(),
            descricao: "500mg".to_string(),
            preco: BigDecimal::from_str("12.50").unwrap(),
            categoria_id,
        }
    }

    #[actix_web::test]
    async fn ids_sao_gerados_em_sequencia() {
        let repo = MemoriaCatalogo::new();
        let a = repo.inserir_categoria(&categoria("Analgésicos")).await.unwrap();
        let b = repo.inserir_categoria(&categoria("Vitaminas")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let p = repo.inserir_produto(&produto("Paracetamol", None)).await.unwrap();
        assert_eq!(p.id, 1);
    }

    #[actix_web::test]
    async fn produto_com_categoria_inexistente_falha_com_referencia() {
        let repo = MemoriaCatalogo::new();
        let erro = repo
            .inserir_produto(&produto("Paracetamol", Some(42)))
            .await
            .unwrap_err();
        assert!(matches!(erro, ErroApp::Referencia(42)));
        assert!(repo.listar_produtos().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn deletar_categoria_remove_todos_os_produtos_dela() {
        let repo = MemoriaCatalogo::new();
        let analgesicos = repo.inserir_categoria(&categoria("Analgésicos")).await.unwrap();
        let vitaminas = repo.inserir_categoria(&categoria("Vitaminas")).await.unwrap();

        for nome in ["Paracetamol", "Dipirona", "Ibuprofeno"] {
            repo.inserir_produto(&produto(nome, Some(analgesicos.id)))
                .await
                .unwrap();
        }
        let vitamina_c = repo
            .inserir_produto(&produto("Vitamina C", Some(vitaminas.id)))
            .await
            .unwrap();
        let avulso = repo.inserir_produto(&produto("Álcool", None)).await.unwrap();

        let removidos = repo.deletar_categoria(analgesicos.id).await.unwrap();
        assert_eq!(removidos, Some(3));

        let restantes: Vec<i64> = repo
            .listar_produtos()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(restantes, vec![vitamina_c.id, avulso.id]);
        assert_eq!(repo.buscar_categoria(analgesicos.id).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn deletar_categoria_inexistente_devolve_none() {
        let repo = MemoriaCatalogo::new();
        assert_eq!(repo.deletar_categoria(5).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn produtos_da_categoria_segue_o_vinculo_atual() {
        let repo = MemoriaCatalogo::new();
        let a = repo.inserir_categoria(&categoria("A")).await.unwrap();
        let b = repo.inserir_categoria(&categoria("B")).await.unwrap();
        let p = repo.inserir_produto(&produto("Soro", Some(a.id))).await.unwrap();

        repo.atualizar_produto(p.id, &produto("Soro", Some(b.id)))
            .await
            .unwrap()
            .unwrap();

        assert!(repo.produtos_da_categoria(a.id).await.unwrap().is_empty());
        assert_eq!(repo.produtos_da_categoria(b.id).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn atualizar_com_categoria_inexistente_nao_altera_o_produto() {
        let repo = MemoriaCatalogo::new();
        let p = repo.inserir_produto(&produto("Soro", None)).await.unwrap();

        let erro = repo
            .atualizar_produto(p.id, &produto("Outro", Some(99)))
            .await
            .unwrap_err();
        assert!(matches!(erro, ErroApp::Referencia(99)));
        assert_eq!(repo.buscar_produto(p.id).await.unwrap(), Some(p));
    }

    #[actix_web::test]
    async fn atualizar_inexistente_devolve_none() {
        let repo = MemoriaCatalogo::new();
        assert_eq!(
            repo.atualizar_categoria(1, &categoria("X")).await.unwrap(),
            None
        );
        assert_eq!(
            repo.atualizar_produto(1, &produto("X", None)).await.unwrap(),
            None
        );
    }

    #[actix_web::test]
    async fn busca_por_nome_ignora_maiusculas() {
        let repo = MemoriaCatalogo::new();
        repo.inserir_categoria(&categoria("Analgésicos")).await.unwrap();
        repo.inserir_categoria(&categoria("Vitaminas")).await.unwrap();
        repo.inserir_produto(&produto("Paracetamol", None)).await.unwrap();

        let categorias = repo.buscar_categorias_por_nome("ANALG").await.unwrap();
        assert_eq!(categorias.len(), 1);
        assert_eq!(categorias[0].nome, "Analgésicos");

        let produtos = repo.buscar_produtos_por_nome("cetam").await.unwrap();
        assert_eq!(produtos.len(), 1);
        assert!(repo.buscar_produtos_por_nome("dipirona").await.unwrap().is_empty());
    }
}
