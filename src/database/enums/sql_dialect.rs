/// SQL flavour a connector speaks. Only the pooled engines have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlDialect {
    Sqlite,
    MySql,
}
