fn main() {
    multiversx_sc_meta_lib::cli_main::<post_registry::AbiProvider>();
}
