use crate::core::types::Job;
use crate::discovery::resolver::resolve;

/// One job per path against a single target.
pub fn directory_jobs(target: &str, paths: &[String]) -> Vec<Job> {
    let target = target.trim();
    paths
        .iter()
        .map(|path| Job::new(target, path.as_str(), resolve(target, path)))
        .collect()
}

/// The full site x path cross product, site-major.
pub fn breach_jobs(sites: &[String], paths: &[String]) -> Vec<Job> {
    let mut jobs = Vec::with_capacity(sites.len() * paths.len());
    for site in sites {
        let site = site.trim();
        for path in paths {
            jobs.push(Job::new(site, path.as_str(), resolve(site, path)));
        }
    }
    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_directory_jobs() {
        let jobs = directory_jobs("https://example.com", &strings(&["admin", "/login"]));

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].site, "https://example.com");
        assert_eq!(jobs[0].path, "admin");
        assert_eq!(jobs[0].url, "https://example.com/admin");
        assert_eq!(jobs[1].url, "https://example.com/login");
    }

    #[test]
    fn test_breach_jobs_cross_product() {
        let sites = strings(&["https://a.example/", "https://b.example"]);
        let paths = strings(&[".env", ".git/config", "backup.sql"]);

        let jobs = breach_jobs(&sites, &paths);

        assert_eq!(jobs.len(), 6);
        assert_eq!(jobs[0].url, "https://a.example/.env");
        assert_eq!(jobs[2].url, "https://a.example/backup.sql");
        assert_eq!(jobs[3].site, "https://b.example");
        assert_eq!(jobs[5].url, "https://b.example/backup.sql");
    }

    #[test]
    fn test_breach_jobs_empty_inputs() {
        assert!(breach_jobs(&[], &strings(&["a"])).is_empty());
        assert!(breach_jobs(&strings(&["https://a.example"]), &[]).is_empty());
    }
}
