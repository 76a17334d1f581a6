//! Attribute identifiers and value-encryption policy.
//!
//! Every replicated attribute carries a numeric schema identifier. A
//! small, fixed subset of attributes holds secret material (password
//! hashes, trust secrets, credential blobs) and is sealed on the wire;
//! everything else replicates in the clear. The mapping from identifier
//! to policy is a static table with no side effects and no failure mode:
//! identifiers outside the table are passed through unchanged.

/// Numeric schema identifier of a replicated attribute.
///
/// Identifiers are assigned by the directory schema and compared by
/// value. The constants below name the attributes whose values are
/// sealed during replication; any other identifier classifies as
/// [`ValuePolicy::Passthrough`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttrId(u32);

impl AttrId {
    /// NT one-way password hash (`unicodePwd`).
    pub const UNICODE_PWD: Self = Self(0x0009_005A);

    /// LM one-way password hash (`dBCSPwd`).
    pub const DBCS_PWD: Self = Self(0x0009_0037);

    /// NT password history (`ntPwdHistory`).
    pub const NT_PWD_HISTORY: Self = Self(0x0009_005E);

    /// LM password history (`lmPwdHistory`).
    pub const LM_PWD_HISTORY: Self = Self(0x0009_00A0);

    /// Packaged supplemental credentials (`supplementalCredentials`).
    pub const SUPPLEMENTAL_CREDENTIALS: Self = Self(0x0009_007D);

    /// Previous value of a secret object (`priorValue`).
    pub const PRIOR_VALUE: Self = Self(0x0009_0062);

    /// Current value of a secret object (`currentValue`).
    pub const CURRENT_VALUE: Self = Self(0x0009_001B);

    /// Outgoing trust-relationship secret (`trustAuthOutgoing`).
    pub const TRUST_AUTH_OUTGOING: Self = Self(0x0009_0087);

    /// Incoming trust-relationship secret (`trustAuthIncoming`).
    pub const TRUST_AUTH_INCOMING: Self = Self(0x0009_0081);

    /// Initial outgoing trust secret (`initialAuthOutgoing`).
    pub const INITIAL_AUTH_OUTGOING: Self = Self(0x0009_021C);

    /// Initial incoming trust secret (`initialAuthIncoming`).
    pub const INITIAL_AUTH_INCOMING: Self = Self(0x0009_021B);

    /// Wrap a raw schema identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Value-encryption policy for this attribute.
    ///
    /// Total over the identifier domain: the listed secret attributes map
    /// to their sealing policy, everything else to
    /// [`ValuePolicy::Passthrough`].
    ///
    /// Password hashes and their histories are additionally block-keyed
    /// to the owning account's RID ([`ValuePolicy::RidSealed`]): the
    /// account database stores them under that transform, and the
    /// replication stream carries them the same way.
    #[must_use]
    pub const fn policy(self) -> ValuePolicy {
        match self {
            Self::UNICODE_PWD | Self::DBCS_PWD | Self::NT_PWD_HISTORY | Self::LM_PWD_HISTORY => {
                ValuePolicy::RidSealed
            },
            Self::SUPPLEMENTAL_CREDENTIALS
            | Self::PRIOR_VALUE
            | Self::CURRENT_VALUE
            | Self::TRUST_AUTH_OUTGOING
            | Self::TRUST_AUTH_INCOMING
            | Self::INITIAL_AUTH_OUTGOING
            | Self::INITIAL_AUTH_INCOMING => ValuePolicy::Sealed,
            _ => ValuePolicy::Passthrough,
        }
    }

    /// True if this attribute's value is sealed on the wire.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        !matches!(self.policy(), ValuePolicy::Passthrough)
    }
}

impl From<u32> for AttrId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<AttrId> for u32 {
    fn from(id: AttrId) -> Self {
        id.0
    }
}

/// How a replicated attribute value is protected on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValuePolicy {
    /// Not a secret attribute; the value replicates unchanged.
    Passthrough,

    /// Sealed with the session-keyed stream construction.
    Sealed,

    /// Sealed, with the body additionally transformed in 16-byte blocks
    /// under a key derived from the owning account's RID.
    RidSealed,
}
