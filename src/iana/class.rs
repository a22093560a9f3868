//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

mnemonic_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant, but zone files in the wild carry the others occasionally.
    ///
    /// The ANY class is written as `*` but the spelled out mnemonic is
    /// accepted, too.
    =>
    Class, u16, "unknown class";

    /// Internet (IN).
    (IN => 1, "IN")

    /// CSNET (CS).
    ///
    /// Obsolete, used only for examples in some obsolete RFCs.
    (CS => 2, "CS")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class * (ANY).
    (ANY => 255, "*", "ANY")
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn from_str() {
        assert_eq!(Class::from_str("IN"), Ok(Class::IN));
        assert_eq!(Class::from_str("in"), Ok(Class::IN));
        assert_eq!(Class::from_str("Ch"), Ok(Class::CH));
        assert_eq!(Class::from_str("*"), Ok(Class::ANY));
        assert_eq!(Class::from_str("any"), Ok(Class::ANY));
        assert!(Class::from_str("NONE").is_err());
        assert!(Class::from_str("3600").is_err());
        assert!(Class::from_str("").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Class::IN.to_string(), "IN");
        assert_eq!(Class::ANY.to_string(), "*");
    }

    #[test]
    fn int_values() {
        for class in Class::ALL {
            assert_eq!(Class::from_int(class.to_int()), Some(*class));
        }
        assert_eq!(Class::from_int(254), None);
    }

    #[test]
    fn no_class_is_numeric() {
        for class in Class::ALL {
            assert!(class.to_mnemonic().parse::<u32>().is_err());
        }
    }
}
