/*! Integration tests for trellis.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - doc: Tests for the nested document type
 * - ordered: Tests for the ordered container family
 * - path: Tests for path addressing and the segment codec
 * - walk: Conformance suite run against both traversal strategies
 * - tree: Tests for the path-addressed tree facade
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("trellis=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod doc;
mod helpers;
mod path;
mod tree;
