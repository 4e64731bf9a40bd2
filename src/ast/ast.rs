use super::statements::Stmt;

/// Root of a parsed program: the top-level statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct Start {
    pub body: Vec<Stmt>,
}

impl Start {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }
}
