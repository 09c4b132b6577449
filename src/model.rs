use indexmap::IndexMap;
use sqlx::FromRow;

/// An element of the cartridge database, with its attributes in document order.
#[derive(Debug, Default, PartialEq)]
pub struct Node {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Direct children with the given tag, in document order.
    pub fn elements<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn element(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name == name)
    }
}

#[derive(Debug, FromRow)]
pub struct SearchRow {
    pub game_name: Option<String>,
    pub region: Option<String>,
    pub mapper: Option<String>,
    pub board_type: Option<String>,
    pub prg_name: Option<String>,
    pub prg_size: Option<String>,
    pub chr_name: Option<String>,
    pub chr_size: Option<String>,
    pub vram_size: Option<String>,
    pub wram_size: Option<String>,
    pub battery: Option<String>,
    #[sqlx(default)]
    pub chip_type: Option<String>,
}
