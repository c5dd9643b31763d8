use crate::*;

pub(crate) fn validate_base_url(policy: UrlPolicy, base_url: &str) -> Result<(), QuyxError> {
    if base_url.is_empty() {
        return Err(QuyxError::InvalidArgument(
            "Base URL cannot be empty".into(),
        ));
    }
    match policy {
        UrlPolicy::NonEmpty => Ok(()),
        UrlPolicy::Http => {
            if !HTTP_URL_SCHEMES
                .iter()
                .any(|scheme| base_url.starts_with(scheme))
            {
                return Err(QuyxError::InvalidArgument(format!(
                    "Base URL must start with one of {:?}",
                    HTTP_URL_SCHEMES
                )));
            }
            if base_url.chars().any(char::is_whitespace) {
                return Err(QuyxError::InvalidArgument(
                    "Base URL cannot contain whitespace".into(),
                ));
            }
            Ok(())
        }
    }
}

pub(crate) fn page_bounds(from_index: Option<U64>, limit: Option<u32>) -> (usize, usize) {
    let start = from_index
        .map(|i| usize::try_from(i.0).unwrap_or(usize::MAX))
        .unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}
