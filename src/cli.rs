//! Command-line surface.

use clap::Parser;

use crate::http::request::RequestOptions;

/// Version string; also the default User-Agent value.
pub const VERSION: &str = concat!("httphead ", env!("CARGO_PKG_VERSION"));

pub const LICENSE: &str = "\
httphead is distributed under the BSD 3-clause license.

Copyright (c) 2026 The httphead authors
All rights reserved.

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions
are met:
1. Redistributions of source code must retain the above copyright
   notice, this list of conditions and the following disclaimer.
2. Redistributions in binary form must reproduce the above copyright
   notice, this list of conditions and the following disclaimer in the
   documentation and/or other materials provided with the distribution.
3. The name of the author may not be used to endorse or promote products
   derived from this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE AUTHOR ``AS IS'' AND ANY EXPRESS OR
IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES
OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED.
IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY DIRECT, INDIRECT,
INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT
NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF
THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
";

/// show http header of a website
#[derive(Parser, Debug)]
#[command(name = "httphead")]
pub struct Cli {
    /// show sent request
    #[arg(short = 'r')]
    pub show_request: bool,

    /// show only the received status code
    #[arg(short = 'q')]
    pub status_only: bool,

    /// don't send User-Agent
    #[arg(short = 'n')]
    pub no_user_agent: bool,

    /// send User-Agent: useragent
    #[arg(short = 'u', value_name = "useragent")]
    pub user_agent: Option<String>,

    /// send Accept: acceptstr
    #[arg(short = 'a', value_name = "acceptstr")]
    pub accept: Option<String>,

    /// send Accept-Encoding: acceptenc
    #[arg(short = 'e', value_name = "acceptenc")]
    pub accept_encoding: Option<String>,

    /// send Accept-Charset: acceptchs
    #[arg(short = 'c', value_name = "acceptchs")]
    pub accept_charset: Option<String>,

    /// send Accept-Language: acceptlng
    #[arg(short = 'l', value_name = "acceptlng")]
    pub accept_language: Option<String>,

    /// show version
    #[arg(short = 'v')]
    pub version: bool,

    /// display the (BSD) license
    #[arg(short = 'b')]
    pub license: bool,

    #[arg(value_name = "URL")]
    pub url: Option<String>,
}

impl Cli {
    /// Collapse the flag soup into request options. `-n` wins over `-u`;
    /// without either, the version string is sent as User-Agent.
    pub fn request_options(&self, credentials: Option<String>) -> RequestOptions {
        let user_agent = if self.no_user_agent {
            None
        } else {
            Some(self.user_agent.clone().unwrap_or_else(|| VERSION.to_string()))
        };

        RequestOptions {
            user_agent,
            accept: self.accept.clone(),
            accept_encoding: self.accept_encoding.clone(),
            accept_charset: self.accept_charset.clone(),
            accept_language: self.accept_language.clone(),
            credentials,
        }
    }
}
