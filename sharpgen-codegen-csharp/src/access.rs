use sharpgen_ir::AccessModifier;

/// The C# keyword text for an access modifier.
pub fn access_keyword(access: AccessModifier) -> &'static str {
    match access {
        AccessModifier::Public => "public",
        AccessModifier::Private => "private",
        AccessModifier::Protected => "protected",
        AccessModifier::Internal => "internal",
        AccessModifier::PrivateProtected => "private protected",
        AccessModifier::ProtectedInternal => "protected internal",
    }
}
