#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: u32,
    pub name: String,
    pub iso3: String,
    pub iso2: String,
    pub phone_code: String,
    pub capital: String,
    pub currency: String,
    pub native: Option<String>,
}

impl Country {
    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Iso3 => &self.iso3,
            Field::Iso2 => &self.iso2,
            Field::PhoneCode => &self.phone_code,
            Field::Capital => &self.capital,
            Field::Currency => &self.currency,
            Field::Native => self.native.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Iso3,
    Iso2,
    PhoneCode,
    Capital,
    Currency,
    Native,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Iso3 => "iso3",
            Field::Iso2 => "iso2",
            Field::PhoneCode => "phone_code",
            Field::Capital => "capital",
            Field::Currency => "currency",
            Field::Native => "native",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        match key {
            "name" => Some(Field::Name),
            "iso3" => Some(Field::Iso3),
            "iso2" => Some(Field::Iso2),
            "phone_code" => Some(Field::PhoneCode),
            "capital" => Some(Field::Capital),
            "currency" => Some(Field::Currency),
            "native" => Some(Field::Native),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Country",
            Field::Iso3 => "ISO3",
            Field::Iso2 => "Code",
            Field::PhoneCode => "Phone Code",
            Field::Capital => "Capital",
            Field::Currency => "Currency",
            Field::Native => "Native",
        }
    }
}
