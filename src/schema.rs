use itertools::Itertools;

pub struct Column {
    pub name: &'static str,
    pub attribute: &'static str,
}

impl Column {
    /// A column filled from the source attribute of the same name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            attribute: name,
        }
    }
}

pub struct ForeignKey {
    pub column: &'static str,
    pub table: &'static str,
}

pub struct Table {
    pub name: &'static str,
    pub parent: Option<ForeignKey>,
    pub columns: &'static [Column],
}

impl Table {
    pub fn create_statement(&self) -> String {
        let mut definitions = vec![String::from("id INTEGER PRIMARY KEY AUTOINCREMENT")];
        if let Some(parent) = &self.parent {
            definitions.push(format!("{} INTEGER NOT NULL", parent.column));
        }
        definitions.extend(
            self.columns
                .iter()
                .map(|column| format!("\"{}\" TEXT", column.name)),
        );
        if let Some(parent) = &self.parent {
            definitions.push(format!(
                "FOREIGN KEY({}) REFERENCES {}(id)",
                parent.column, parent.table
            ));
        }
        format!(
            "CREATE TABLE {} (\n    {}\n);\n",
            self.name,
            definitions.join(",\n    ")
        )
    }

    pub fn insert_statement(&self) -> String {
        let names = self
            .parent
            .iter()
            .map(|parent| parent.column)
            .chain(self.columns.iter().map(|column| column.name))
            .map(|name| format!("\"{}\"", name))
            .collect::<Vec<String>>();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.name,
            names.iter().join(", "),
            names.iter().map(|_| "?").join(", ")
        )
    }
}

pub static GAME: Table = Table {
    name: "game",
    parent: None,
    columns: &[
        Column::new("name"),
        Column::new("altname"),
        Column::new("class"),
        Column::new("subclass"),
        Column::new("catalog"),
        Column::new("publisher"),
        Column::new("developer"),
        Column::new("region"),
        Column::new("players"),
        Column::new("date"),
    ],
};

pub static DEVICE: Table = Table {
    name: "device",
    parent: Some(ForeignKey {
        column: "game_id",
        table: "game",
    }),
    columns: &[Column::new("type"), Column::new("name")],
};

pub static CARTRIDGE: Table = Table {
    name: "cartridge",
    parent: Some(ForeignKey {
        column: "game_id",
        table: "game",
    }),
    columns: &[
        Column::new("system"),
        Column::new("revision"),
        Column::new("crc"),
        Column::new("sha1"),
        Column::new("dump"),
        Column::new("dumper"),
        Column::new("datedumped"),
    ],
};

pub static BOARD: Table = Table {
    name: "board",
    parent: Some(ForeignKey {
        column: "cartridge_id",
        table: "cartridge",
    }),
    columns: &[
        Column::new("type"),
        Column::new("pcb"),
        Column::new("mapper"),
    ],
};

pub static PRG: Table = Table {
    name: "prg",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[
        Column::new("name"),
        Column::new("size"),
        Column::new("crc"),
        Column::new("sha1"),
    ],
};

pub static CHR: Table = Table {
    name: "chr",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[
        Column::new("name"),
        Column::new("size"),
        Column::new("crc"),
        Column::new("sha1"),
    ],
};

pub static VRAM: Table = Table {
    name: "vram",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[Column::new("size")],
};

pub static WRAM: Table = Table {
    name: "wram",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[Column::new("size"), Column::new("battery")],
};

pub static CHIP: Table = Table {
    name: "chip",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[Column::new("type")],
};

pub static CHIP_PIN: Table = Table {
    name: "chip_pin",
    parent: Some(ForeignKey {
        column: "chip_id",
        table: "chip",
    }),
    columns: &[Column::new("number"), Column::new("function")],
};

pub static CIC: Table = Table {
    name: "cic",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[Column::new("type")],
};

pub static PAD: Table = Table {
    name: "pad",
    parent: Some(ForeignKey {
        column: "board_id",
        table: "board",
    }),
    columns: &[Column::new("h"), Column::new("v")],
};

/// Every table, parents before children.
pub static TABLES: [&Table; 12] = [
    &GAME, &DEVICE, &CARTRIDGE, &BOARD, &PRG, &CHR, &VRAM, &WRAM, &CHIP, &CHIP_PIN, &CIC, &PAD,
];

lazy_static! {
    pub static ref SCHEMA: String = TABLES.iter().map(|table| table.create_statement()).join("\n");
}
