//! Testes contra um PostgreSQL real.
//! Só rodam com `DATABASE_URL` definida; sem ela cada teste retorna sem fazer nada.

use std::str::FromStr;

use bigdecimal::BigDecimal;

use farmacia::categorias::categoria_structs::DadosCategoria;
use farmacia::config::ConfigBanco;
use farmacia::produtos::produtos_structs::DadosProduto;
use farmacia::repositorio::{CatalogoRepositorio, PgCatalogo};
use farmacia::shared::erros::ErroApp;

async fn conectar() -> Option<PgCatalogo> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let config = ConfigBanco {
        url,
        max_conexoes: 2,
    };
    Some(
        PgCatalogo::conectar(&config)
            .await
            .expect("falha ao conectar no DATABASE_URL"),
    )
}

fn categoria(nome: &str) -> DadosCategoria {
    DadosCategoria {
        nome: nome.to_string(),
        descricao: "Dor e febre".to_string(),
    }
}

fn produto(nome: &str, categoria_id: Option<i64>) -> DadosProduto {
    DadosProduto {
        sku: format!("PG-{nome}"),
        nome_produto: nome.to_string(),
        descricao: "500mg".to_string(),
        preco: BigDecimal::from_str("12.50").unwrap(),
        categoria_id,
    }
}

#[actix_web::test]
async fn deletar_categoria_remove_os_produtos_na_mesma_transacao() {
    let Some(repo) = conectar().await else {
        return;
    };

    let analgesicos = repo.inserir_categoria(&categoria("Analgésicos")).await.unwrap();
    let outra = repo.inserir_categoria(&categoria("Vitaminas")).await.unwrap();
    let mut ids = Vec::new();
    for nome in ["Paracetamol", "Dipirona"] {
        let p = repo
            .inserir_produto(&produto(nome, Some(analgesicos.id)))
            .await
            .unwrap();
        ids.push(p.id);
    }
    let vitamina = repo
        .inserir_produto(&produto("Vitamina C", Some(outra.id)))
        .await
        .unwrap();

    assert_eq!(repo.deletar_categoria(analgesicos.id).await.unwrap(), Some(2));
    for id in ids {
        assert_eq!(repo.buscar_produto(id).await.unwrap(), None);
    }
    assert_eq!(repo.buscar_categoria(analgesicos.id).await.unwrap(), None);
    assert_eq!(repo.deletar_categoria(analgesicos.id).await.unwrap(), None);

    // O produto de outra categoria continua lá
    let ainda_existe = repo.buscar_produto(vitamina.id).await.unwrap().unwrap();
    assert_eq!(ainda_existe.preco, BigDecimal::from_str("12.5").unwrap());

    repo.deletar_categoria(outra.id).await.unwrap();
}

#[actix_web::test]
async fn chave_estrangeira_violada_vira_erro_de_referencia() {
    let Some(repo) = conectar().await else {
        return;
    };
    let inexistente = i64::MAX;

    let erro = repo
        .inserir_produto(&produto("Órfão", Some(inexistente)))
        .await
        .unwrap_err();
    assert!(matches!(erro, ErroApp::Referencia(id) if id == inexistente));

    let p = repo.inserir_produto(&produto("Avulso", None)).await.unwrap();
    let erro = repo
        .atualizar_produto(p.id, &produto("Avulso", Some(inexistente)))
        .await
        .unwrap_err();
    assert!(matches!(erro, ErroApp::Referencia(id) if id == inexistente));
    assert_eq!(repo.buscar_produto(p.id).await.unwrap(), Some(p.clone()));

    assert!(repo.deletar_produto(p.id).await.unwrap());
}
