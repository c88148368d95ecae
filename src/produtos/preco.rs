// src/produtos/preco.rs

//! Forma do `preco` no JSON: número decimal na saída; número ou texto na entrada.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::{self, Serializer};
use serde::Deserialize;

/// Máximo de dígitos significativos aceitos.
pub const DIGITOS_MAX: usize = 100;
/// Casas decimais aceitas (escala positiva).
pub const ESCALA_MAX: i64 = 100;
/// Expoente aceito (escala negativa), mantém o valor finito como `f64`.
pub const ESCALA_MIN: i64 = -200;

/// Verifica se o valor cabe no NUMERIC e na saída JSON.
pub fn dentro_dos_limites(preco: &BigDecimal) -> bool {
    let (inteiro, escala) = preco.as_bigint_and_exponent();
    let digitos = inteiro.to_string().trim_start_matches('-').len();
    digitos <= DIGITOS_MAX && (ESCALA_MIN..=ESCALA_MAX).contains(&escala)
}

/// Escreve o preço como número JSON.
pub fn serializar<S: Serializer>(preco: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error> {
    let valor = f64::from_str(&preco.to_string()).map_err(ser::Error::custom)?;
    if !valor.is_finite() {
        return Err(ser::Error::custom("preço fora do intervalo de f64"));
    }
    serializer.serialize_f64(valor)
}

pub fn deserializar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
    deserializer.deserialize_any(VisitantePreco)
}

/// Para campos opcionais: `null` e campo ausente viram `None`.
pub fn deserializar_opcional<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<BigDecimal>, D::Error> {
    Ok(Option::<PrecoJson>::deserialize(deserializer)?.map(|p| p.0))
}

struct PrecoJson(BigDecimal);

impl<'de> Deserialize<'de> for PrecoJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializar(deserializer).map(PrecoJson)
    }
}

struct VisitantePreco;

impl<'de> Visitor<'de> for VisitantePreco {
    type Value = BigDecimal;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("um número decimal")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<BigDecimal, E> {
        Ok(BigDecimal::from(v))
    }

    // Display de f64 gera a menor representação exata: 12.5 e não 12.50000000000000
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<BigDecimal, E> {
        if !v.is_finite() {
            return Err(E::custom("preço precisa ser finito"));
        }
        BigDecimal::from_str(&v.to_string()).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<BigDecimal, E> {
        BigDecimal::from_str(v.trim()).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize, Deserialize)]
    struct Item {
        #[serde(serialize_with = "serializar", deserialize_with = "deserializar")]
        preco: BigDecimal,
    }

    fn ler(valor: serde_json::Value) -> BigDecimal {
        serde_json::from_value::<Item>(json!({ "preco": valor }))
            .unwrap()
            .preco
    }

    #[test]
    fn numero_json_nao_ganha_ruido_de_float() {
        let preco = ler(json!(12.50));
        assert_eq!(preco.to_string(), "12.5");
    }

    #[test]
    fn aceita_inteiro_e_texto() {
        assert_eq!(ler(json!(15)), BigDecimal::from(15));
        assert_eq!(ler(json!(" 12.50 ")), BigDecimal::from_str("12.5").unwrap());
    }

    #[test]
    fn texto_que_nao_e_numero_falha() {
        let r = serde_json::from_value::<Item>(json!({ "preco": "doze" }));
        assert!(r.is_err());
    }

    #[test]
    fn saida_e_numero_json() {
        let item = Item {
            preco: BigDecimal::from_str("12.50").unwrap(),
        };
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "preco": 12.5 }));
    }

    #[test]
    fn limites_recusam_expoente_gigante() {
        let gigante = BigDecimal::from_str("1e400000000").unwrap();
        assert!(!dentro_dos_limites(&gigante));

        let minusculo = BigDecimal::from_str("1e-400").unwrap();
        assert!(!dentro_dos_limites(&minusculo));

        let muitos_digitos = BigDecimal::from_str(&"9".repeat(DIGITOS_MAX + 1)).unwrap();
        assert!(!dentro_dos_limites(&muitos_digitos));
    }

    #[test]
    fn limites_aceitam_precos_comuns() {
        for valor in ["12.50", "0", "-3.20", "1e200", "999999.9999"] {
            let preco = BigDecimal::from_str(valor).unwrap();
            assert!(dentro_dos_limites(&preco), "preço {valor}");
        }
    }
}
