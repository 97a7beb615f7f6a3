//! Canonical Solidity-like text formatting for [`DynSolType`] descriptors: elementary name,
//! `T[]` for a dynamic array, `T[k]` for a fixed array, `(T1,...,Tn)` for a tuple. The empty
//! tuple `()` wrapped in an array therefore renders as the `()[]` sentinel used for payloads
//! that cannot be disambiguated further.

use alloy_dyn_abi::DynSolType;

pub(crate) fn format_type(ty: &DynSolType) -> String {
    match ty {
        DynSolType::Address => "address".to_string(),
        DynSolType::Bool => "bool".to_string(),
        DynSolType::String => "string".to_string(),
        DynSolType::Bytes => "bytes".to_string(),
        DynSolType::Uint(size) => format!("uint{size}"),
        DynSolType::Int(size) => format!("int{size}"),
        DynSolType::FixedBytes(size) => format!("bytes{size}"),
        DynSolType::Array(inner) => format!("{}[]", format_type(inner)),
        DynSolType::FixedArray(inner, size) => format!("{}[{size}]", format_type(inner)),
        DynSolType::Tuple(components) => {
            let joined = components.iter().map(format_type).collect::<Vec<_>>().join(",");
            format!("({joined})")
        }
        // The engine never produces function selectors or EIP-712 custom structs itself; this
        // arm exists only so the match stays exhaustive across alloy-dyn-abi versions.
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elementary_types() {
        assert_eq!(format_type(&DynSolType::Address), "address");
        assert_eq!(format_type(&DynSolType::Uint(256)), "uint256");
        assert_eq!(format_type(&DynSolType::FixedBytes(10)), "bytes10");
    }

    #[test]
    fn test_format_array_and_tuple() {
        assert_eq!(format_type(&DynSolType::Array(Box::new(DynSolType::Uint(256)))), "uint256[]");
        assert_eq!(
            format_type(&DynSolType::Tuple(vec![DynSolType::Address, DynSolType::Uint(256)])),
            "(address,uint256)"
        );
    }

    #[test]
    fn test_format_empty_tuple_array_sentinel() {
        let sentinel = DynSolType::Array(Box::new(DynSolType::Tuple(Vec::new())));
        assert_eq!(format_type(&sentinel), "()[]");
    }
}
