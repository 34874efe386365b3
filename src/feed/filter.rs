use crate::models::RepositoryRef;

/// Apply the visibility policy: drop private repositories unless they are
/// explicitly allowed.
pub fn filter_repositories(repos: Vec<RepositoryRef>, include_private: bool) -> Vec<RepositoryRef> {
    if include_private {
        return repos;
    }
    repos.into_iter().filter(|r| !r.is_private).collect()
}
