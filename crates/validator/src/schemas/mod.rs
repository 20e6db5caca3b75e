//! Field schema factories
//!
//! One module per field family. Each exposes an options struct (deserializable
//! from camelCase JSON, with builder setters), a `create_*_schema` factory and
//! the schema type implementing [`FieldSchema`](crate::foundation::FieldSchema).
//!
//! | family | factory | output |
//! |---|---|---|
//! | text | [`create_text_schema`] | `Option<String>` |
//! | email | [`create_email_schema`] | `Option<String>` |
//! | phone | [`create_phone_schema`] | `Option<String>` |
//! | SSN | [`create_ssn_schema`] | `Option<String>` |
//! | date | [`create_date_schema`] | `Option<DateTime<Utc>>` |
//! | memorable date | [`create_memorable_date_schema`] | `Option<NaiveDate>` |
//! | currency | [`create_currency_schema`] | `Option<f64>` |
//! | name | [`create_name_schema`] | `Option<String>` |
//! | full name | [`create_full_name_schema`] | `Option<FullName>` |
//! | address | [`create_address_schema`] | `Option<Address>` |
//! | file(s) | [`create_file_schema`] | `Option<FileUpload>` |

pub mod address;
pub mod currency;
pub mod date;
pub mod email;
pub mod file;
pub mod memorable_date;
pub mod name;
pub mod phone;
pub mod ssn;
pub mod text;

pub use address::{Address, AddressKind, AddressSchema, AddressSchemaOptions, create_address_schema};
pub use currency::{CurrencySchema, CurrencySchemaOptions, create_currency_schema, parse_amount};
pub use date::{DateSchema, DateSchemaOptions, create_date_schema};
pub use email::{EmailSchema, EmailSchemaOptions, create_email_schema};
pub use file::{
    DEFAULT_ALLOWED_TYPES, DEFAULT_MAX_FILE_SIZE, FileInfo, FileSchema, FileSchemaOptions,
    FileUpload, create_file_schema,
};
pub use memorable_date::{MemorableDateSchema, MemorableDateSchemaOptions, create_memorable_date_schema};
pub use name::{
    FullName, FullNameSchema, FullNameSchemaOptions, NameSchema, NameSchemaOptions,
    create_full_name_schema, create_name_schema,
};
pub use phone::{PhoneSchema, PhoneSchemaOptions, create_phone_schema};
pub use ssn::{SsnSchema, SsnSchemaOptions, create_ssn_schema};
pub use text::{TextSchema, TextSchemaOptions, create_text_schema};
