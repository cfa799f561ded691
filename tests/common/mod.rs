#![allow(dead_code)]
pub mod mssql;

pub fn output(buffer: Vec<u8>) -> String {
    return String::from_utf8(buffer).unwrap();
}
