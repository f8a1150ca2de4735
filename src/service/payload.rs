//! Shape validation of JSON request bodies.
//!
//! Only structure is checked here. Whether referenced products exist is
//! decided by the catalog, which owns the index and walks the `productos`
//! list one element at a time.

use serde_json::{Map, Number, Value};

use crate::catalog::{Product, ProductId};
use crate::service::error::CatalogError;

fn object(body: &Value) -> Result<&Map<String, Value>, CatalogError> {
    body.as_object().ok_or_else(|| {
        CatalogError::Validation("El cuerpo de la petición debe ser un objeto JSON".to_string())
    })
}

/// A present, non-null field. `null` counts as missing.
fn present<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields.get(name).filter(|v| !v.is_null())
}

fn optional_text(fields: &Map<String, Value>, name: &str) -> Result<Option<String>, CatalogError> {
    present(fields, name)
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .ok_or_else(|| CatalogError::invalid_field(name, "una cadena de texto"))
        })
        .transpose()
}

/// Numbers are kept as parsed so integers and large literals echo unchanged.
fn optional_number(fields: &Map<String, Value>, name: &str) -> Result<Option<Number>, CatalogError> {
    present(fields, name)
        .map(|v| match v {
            Value::Number(n) => Ok(n.clone()),
            _ => Err(CatalogError::invalid_field(name, "un número")),
        })
        .transpose()
}

/// Build a product from a create-product body.
pub fn product_from_json(body: &Value) -> Result<Product, CatalogError> {
    let fields = object(body)?;

    let id = present(fields, "id")
        .ok_or_else(|| CatalogError::missing_field("id"))?
        .as_i64()
        .ok_or_else(|| CatalogError::invalid_field("id", "un entero"))?;

    Ok(Product {
        id,
        nombre: optional_text(fields, "nombre")?,
        valor: optional_number(fields, "valor")?,
        peso: optional_number(fields, "peso")?,
        descripcion: optional_text(fields, "descripcion")?,
    })
}

/// The raw `productos` list of a create/update-order body.
pub fn product_list(body: &Value) -> Result<&[Value], CatalogError> {
    let fields = object(body)?;

    present(fields, "productos")
        .ok_or_else(|| CatalogError::missing_field("productos"))?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| CatalogError::invalid_field("productos", "una lista"))
}

/// A single element of `productos`.
pub fn product_id(element: &Value) -> Result<ProductId, CatalogError> {
    element.as_i64().ok_or_else(|| {
        CatalogError::Validation("El campo 'productos' solo admite IDs enteros".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_with_all_fields() {
        let product = product_from_json(&json!({
            "id": 3,
            "nombre": "Leche",
            "valor": 1.5,
            "peso": 1,
            "descripcion": "Entera",
        }))
        .unwrap();

        assert_eq!(product.id, 3);
        assert_eq!(product.nombre.as_deref(), Some("Leche"));
        assert_eq!(product.valor.and_then(|n| n.as_f64()), Some(1.5));
        assert_eq!(product.peso.as_ref().and_then(Number::as_i64), Some(1));
        assert_eq!(product.descripcion.as_deref(), Some("Entera"));
    }

    #[test]
    fn test_product_id_required() {
        let expected = CatalogError::missing_field("id");
        assert_eq!(product_from_json(&json!({"nombre": "Pan"})), Err(expected.clone()));
        assert_eq!(product_from_json(&json!({"id": null})), Err(expected));
    }

    #[test]
    fn test_product_field_types() {
        assert_eq!(
            product_from_json(&json!({"id": "uno"})),
            Err(CatalogError::invalid_field("id", "un entero"))
        );
        assert_eq!(
            product_from_json(&json!({"id": 1, "valor": "caro"})),
            Err(CatalogError::invalid_field("valor", "un número"))
        );
        assert_eq!(
            product_from_json(&json!({"id": 1, "nombre": 5})),
            Err(CatalogError::invalid_field("nombre", "una cadena de texto"))
        );
    }

    #[test]
    fn test_body_must_be_object() {
        assert!(matches!(product_from_json(&json!([1])), Err(CatalogError::Validation(_))));
        assert!(matches!(product_list(&json!("x")), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_numbers_kept_as_sent() {
        let product = product_from_json(&json!({
            "id": 1,
            "peso": 1,
            "valor": 9007199254740993u64,
        }))
        .unwrap();

        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains(r#""peso":1,"#));
        assert!(json.contains(r#""valor":9007199254740993,"#));
    }

    #[test]
    fn test_product_list() {
        let body = json!({"productos": [1, 2, 2]});
        assert_eq!(product_list(&body), Ok(&[json!(1), json!(2), json!(2)][..]));
        assert_eq!(product_list(&json!({"productos": []})), Ok(&[][..]));
        assert_eq!(product_id(&json!(-4)), Ok(-4));
    }

    #[test]
    fn test_product_ids_missing_or_wrong_type() {
        assert_eq!(
            product_list(&json!({})),
            Err(CatalogError::missing_field("productos"))
        );
        assert_eq!(
            product_list(&json!({"productos": null})),
            Err(CatalogError::missing_field("productos"))
        );
        assert_eq!(
            product_list(&json!({"productos": 1})),
            Err(CatalogError::invalid_field("productos", "una lista"))
        );
        assert!(matches!(product_id(&json!("dos")), Err(CatalogError::Validation(_))));
        assert!(matches!(product_id(&json!(1.5)), Err(CatalogError::Validation(_))));
    }
}
