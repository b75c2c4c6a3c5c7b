use libtest_mimic::Arguments;
use libtest_mimic::Trial;
use s3browse::error::Result;

mod operations;

pub use utils::*;

fn main() -> Result<()> {
    let args = Arguments::from_args();

    let mut tests = Vec::new();

    operations::buckets::tests(&mut tests);
    operations::list::tests(&mut tests);
    operations::stat::tests(&mut tests);
    operations::upload::tests(&mut tests);
    operations::download::tests(&mut tests);
    operations::delete::tests(&mut tests);
    operations::transport::tests(&mut tests);

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let conclusion = libtest_mimic::run(&args, tests);

    TEST_RUNTIME.block_on(TEST_FIXTURE.cleanup());

    conclusion.exit()
}
