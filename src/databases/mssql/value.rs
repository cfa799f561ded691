use tiberius::ColumnData;

use crate::databases::table::Value;
use crate::error::Error;

impl TryFrom<(&str, ColumnData<'static>)> for Value {
    type Error = Error;

    fn try_from(value: (&str, ColumnData<'static>)) -> Result<Self, Self::Error> {
        let (column, data) = value;
        let parsed = match data {
            ColumnData::String(Some(s)) => Value::String(s.into_owned()),
            ColumnData::U8(Some(v)) => Value::I64(v.into()),
            ColumnData::I16(Some(v)) => Value::I64(v.into()),
            ColumnData::I32(Some(v)) => Value::I64(v.into()),
            ColumnData::I64(Some(v)) => Value::I64(v),
            ColumnData::Bit(Some(v)) => Value::I64(v.into()),
            ColumnData::String(None)
            | ColumnData::U8(None)
            | ColumnData::I16(None)
            | ColumnData::I32(None)
            | ColumnData::I64(None)
            | ColumnData::Bit(None) => Value::Null,
            _ => return Err(Error::UnsupportedType(column.to_owned())),
        };
        return Ok(parsed);
    }
}
