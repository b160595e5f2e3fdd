pub use movie_sentiment::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    movie_sentiment::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
