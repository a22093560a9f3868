//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

mnemonic_enum! {
    /// Resource Record Types.
    ///
    /// Each resource record has a 16 bit type value indicating what kind of
    /// information is represented by the record. Only the types listed here
    /// are recognized in zone files; anything else is rejected rather than
    /// accepted through a generic `TYPEnnn` notation.
    ///
    /// Record types are defined in RFC 1035 and later. The registry of
    /// assigned values can be found at
    /// <http://www.iana.org/assignments/dns-parameters/dns-parameters.xhtml#dns-parameters-4>
    =>
    Rtype, u16, "unknown record type";

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// A mail destination.
    ///
    /// (Obsolete – use MX)
    (MD => 3, "MD")

    /// A mail forwarder.
    ///
    /// (Obsolete – use MX)
    (MF => 4, "MF")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A mailbox domain name.
    (MB => 7, "MB")

    /// A mail group member.
    (MG => 8, "MG")

    /// A mail rename domain name.
    (MR => 9, "MR")

    /// A null resource record.
    (NULL => 10, "NULL")

    /// A well known service description.
    (WKS => 11, "WKS")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Host information.
    (HINFO => 13, "HINFO")

    /// Mailbox or mail list information.
    (MINFO => 14, "MINFO")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// For Responsible Person.
    (RP => 17, "RP")

    /// For AFS Data Base location.
    (AFSDB => 18, "AFSDB")

    /// IPv6 address.
    (AAAA => 28, "AAAA")

    /// Location information.
    (LOC => 29, "LOC")

    /// Server selection.
    (SRV => 33, "SRV")

    /// Naming authority pointer.
    (NAPTR => 35, "NAPTR")

    /// Delegation signer.
    (DS => 43, "DS")

    /// SSH key fingerprint.
    (SSHFP => 44, "SSHFP")

    /// RRSIG.
    (RRSIG => 46, "RRSIG")

    /// DNSKEY.
    (DNSKEY => 48, "DNSKEY")

    /// NSEC3.
    (NSEC3 => 50, "NSEC3")

    /// NSEC3PARAM.
    (NSEC3PARAM => 51, "NSEC3PARAM")

    /// Sender policy framework.
    ///
    /// Deprecated by RFC 7208 but still found in zones.
    (SPF => 99, "SPF")
}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!("A".parse(), Ok(Rtype::A));
        assert_eq!("cname".parse(), Ok(Rtype::CNAME));
        assert_eq!("NSEC3PARAM".parse(), Ok(Rtype::NSEC3PARAM));
        assert_eq!("nsec3".parse(), Ok(Rtype::NSEC3));
        assert!("BOGUS".parse::<Rtype>().is_err());
        assert!("TYPE65".parse::<Rtype>().is_err());
        assert!("IN".parse::<Rtype>().is_err());
    }

    #[test]
    fn mnemonics_round_trip() {
        assert_eq!(Rtype::ALL.len(), 29);
        for rtype in Rtype::ALL {
            assert_eq!(
                Rtype::from_mnemonic(rtype.to_string().as_bytes()),
                Some(*rtype)
            );
            assert_eq!(Rtype::from_int(rtype.to_int()), Some(*rtype));
        }
    }

    #[test]
    fn error_display() {
        let err = "BOGUS".parse::<Rtype>().unwrap_err();
        assert_eq!(err.to_string(), "unknown record type");
    }
}
