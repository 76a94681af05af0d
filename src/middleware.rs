pub mod method_override;
