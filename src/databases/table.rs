#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    I64(i64),
    Null,
}

/// A fetched row, keeping the column order of the result set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        return Self::default();
    }

    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        self.fields.push((name.into(), value));
    }

    /// Value of the first column with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        return self
            .fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value);
    }

    pub fn column_names(&self) -> Vec<&str> {
        return self.fields.iter().map(|(name, _)| name.as_str()).collect();
    }

    pub fn len(&self) -> usize {
        return self.fields.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.fields.is_empty();
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (N, Value)>>(iter: T) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.push(name, value);
        }
        return row;
    }
}
