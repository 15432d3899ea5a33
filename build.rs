use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata (version, build time) for --version output
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}