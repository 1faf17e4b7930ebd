fn main() {
    #[cfg(feature = "gtk")]
    glib_build_tools::compile_resources(
        &["resources"],
        "resources/resources.gresource.xml",
        "app_catalog.gresource",
    );
}
