use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    error::Error,
    transaction::{Transaction, TransactionKind},
};

#[derive(Deserialize, Debug, PartialEq)]
struct ParsedStatement {
    movimientos: Vec<ParsedTransaction>,
}

// Unknown fields are deliberately not denied: the wire format may grow
// fields this decoder does not care about.
#[derive(Deserialize, Debug, PartialEq)]
struct ParsedTransaction {
    id: i64,
    tipo: String,
    monto: f64,
    fecha: String,
    descripcion: String,
    usuario: String,
}

/// Decode a JSON statement payload into transactions, preserving input
/// order. Fails atomically: a single malformed record rejects the whole
/// payload.
pub fn parse(payload: &str) -> Result<Vec<Transaction>, Error> {
    let statement: ParsedStatement =
        serde_json::from_str(payload).map_err(|e| Error::MalformedInput(e.to_string()))?;

    // The intermediate representation keeps the wire field names out of the
    // domain type and converts amounts to `Decimal` at the boundary, so all
    // downstream arithmetic is exact.
    statement
        .movimientos
        .into_iter()
        .map(|parsed| {
            let amount = Decimal::from_f64(parsed.monto).ok_or_else(|| {
                Error::MalformedInput(format!("amount `{}` is not representable", parsed.monto))
            })?;
            Ok(Transaction {
                id: parsed.id,
                kind: TransactionKind::from_tag(&parsed.tipo),
                amount,
                date: parsed.fecha,
                description: parsed.descripcion,
                owner: parsed.usuario,
            })
        })
        .collect()
}
