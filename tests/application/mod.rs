mod caption_service_test;
mod model_pool_test;
