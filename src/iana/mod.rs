//! IANA definitions for DNS.
//!
//! This module contains enums for the parameters from IANA registries that
//! show up in the presentation format of resource records, namely the
//! record class and the record type.
//!
//! Both types follow the same basic structure. They are closed enums of the
//! well-known values. There are `from_int()` and `to_int()` for raw integer
//! values, and `FromStr` and `Display` convert from and to the mnemonics
//! used in zone files. Unlike a full DNS implementation, values without a
//! mnemonic are not representable: a zone file entry using one is simply
//! not understood.
//!
//! Each type has a module of its own so that it can have its own
//! `FromStrError`.

pub use self::class::Class;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod rtype;
