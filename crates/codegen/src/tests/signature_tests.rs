// Kernel Signature Tests

use crate::{is_c_identifier, CodegenError, KernelSignature, NumericDescriptor, Pointee};

#[test]
fn test_parameter_order_and_names() {
    let sig =
        KernelSignature::tabulate_tensor(NumericDescriptor::Float64, NumericDescriptor::Float64)
            .unwrap();
    let names: Vec<&str> = sig.params().iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            "A",
            "w",
            "c",
            "coordinate_dofs",
            "entity_local_index",
            "quadrature_permutation"
        ]
    );
}

#[test]
fn test_only_output_is_mutable() {
    let sig =
        KernelSignature::tabulate_tensor(NumericDescriptor::Float32, NumericDescriptor::Float32)
            .unwrap();
    let mutable: Vec<bool> = sig.params().iter().map(|p| p.mutable).collect();
    assert_eq!(mutable, vec![true, false, false, false, false, false]);
}

#[test]
fn test_scalar_and_geometry_pointees() {
    let sig = KernelSignature::tabulate_tensor(
        NumericDescriptor::Complex128,
        NumericDescriptor::Float32,
    )
    .unwrap();
    let params = sig.params();
    assert_eq!(params[0].pointee, Pointee::Scalar(NumericDescriptor::Complex128));
    assert_eq!(params[2].pointee, Pointee::Scalar(NumericDescriptor::Complex128));
    assert_eq!(params[3].pointee, Pointee::Scalar(NumericDescriptor::Float32));
    assert_eq!(params[4].pointee, Pointee::Int);
    assert_eq!(params[5].pointee, Pointee::UInt8);
    assert_eq!(sig.scalar(), NumericDescriptor::Complex128);
    assert_eq!(sig.geometry(), NumericDescriptor::Float32);
}

#[test]
fn test_c_declaration_double() {
    let sig =
        KernelSignature::tabulate_tensor(NumericDescriptor::Float64, NumericDescriptor::Float64)
            .unwrap();
    assert_eq!(
        sig.to_c_declaration("tabulate_tensor"),
        "void tabulate_tensor(double* restrict A, const double* restrict w, \
         const double* restrict c, const double* restrict coordinate_dofs, \
         const int* restrict entity_local_index, \
         const uint8_t* restrict quadrature_permutation)"
    );
}

#[test]
fn test_c_declaration_complex_on_float_geometry() {
    let sig = KernelSignature::tabulate_tensor(
        NumericDescriptor::Complex64,
        NumericDescriptor::Float32,
    )
    .unwrap();
    let decl = sig.to_c_declaration("kernel_0");
    assert!(decl.starts_with("void kernel_0(float _Complex* restrict A, "));
    assert!(decl.contains("const float* restrict coordinate_dofs"));
}

#[test]
fn test_complex_geometry_rejected() {
    let result = KernelSignature::tabulate_tensor(
        NumericDescriptor::Float64,
        NumericDescriptor::Complex128,
    );
    match result {
        Err(CodegenError::UnsupportedType {
            descriptor,
            requirement,
            ..
        }) => {
            assert_eq!(descriptor, "complex128");
            assert!(requirement.is_some_and(|r| r.contains("real floating type")));
        }
        other => panic!("expected UnsupportedType, got {:?}", other),
    }
}

#[test]
fn test_int_geometry_rejected() {
    let result =
        KernelSignature::tabulate_tensor(NumericDescriptor::Float64, NumericDescriptor::NativeInt);
    assert!(matches!(result, Err(CodegenError::UnsupportedType { .. })));
}

#[test]
fn test_pointee_layouts() {
    assert_eq!(Pointee::UInt8.layout().align, 1);
    assert_eq!(Pointee::Int.layout().align, 4);
    assert_eq!(Pointee::Scalar(NumericDescriptor::Complex128).layout().align, 8);
}

#[test]
fn test_c_identifiers() {
    assert!(is_c_identifier("tabulate_tensor"));
    assert!(is_c_identifier("_k1"));
    assert!(!is_c_identifier(""));
    assert!(!is_c_identifier("1kernel"));
    assert!(!is_c_identifier("kernel-1"));
    assert!(!is_c_identifier("a b"));
}
