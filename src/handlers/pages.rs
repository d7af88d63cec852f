use axum::response::Html;

pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

pub async fn test_handler() -> Html<&'static str> {
    Html(include_str!("../../templates/test.html"))
}
