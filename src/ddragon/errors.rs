error_chain!{

    foreign_links {
        Reqwest(::reqwest::Error);
    }

    errors {
        RateLimited(uri : String) {
            description("CDN rate limit exceeded.")
            display("CDN answered 429 TOO MANY REQUESTS for {}", uri)
        }

        BadStatus(uri : String, status : u16) {
            description("CDN returned a non-success status.")
            display("CDN answered {} for {}", status, uri)
        }
    }
}

impl ErrorKind {

    /// True if the CDN told us to back off. Callers surface
    /// this separately from other upstream failures.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ErrorKind::RateLimited(_) => true,
            _ => false,
        }
    }
}
