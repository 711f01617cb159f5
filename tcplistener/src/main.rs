//! Accepts TCP connections and prints the head of the request read from each.
//!
//! Usage:
//!   cargo run -p tcplistener -- --addr localhost:42069 --read-timeout 10
//!   curl http://localhost:42069/coffee

use httpreq::Request;
use std::net::{
    TcpListener,
    TcpStream,
};
use std::thread;
use std::time::Duration;

struct ListenerOptions {
    addr: String,
    read_timeout: Option<Duration>,
}

fn parse_args() -> Result<ListenerOptions, Box<dyn std::error::Error>> {
    let mut args = noargs::raw_args();
    args.metadata_mut().app_name = "tcplistener";

    noargs::HELP_FLAG.take_help(&mut args);

    let version_flag: bool = noargs::flag("version")
        .short('V')
        .doc("Show version")
        .take(&mut args)
        .is_present();
    if version_flag {
        println!("{}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let addr: String = noargs::opt("addr")
        .short('a')
        .doc("Address to listen on")
        .default("localhost:42069")
        .take(&mut args)
        .then(|o| Ok::<_, &str>(o.value().to_string()))
        .map_err(|e| format!("{:?}", e))?;

    let read_timeout: Option<u64> = noargs::opt("read-timeout")
        .doc("Seconds to wait for more request bytes before giving up")
        .take(&mut args)
        .present_and_then(|o| o.value().parse())
        .map_err(|e| format!("{:?}", e))?;

    if let Some(help) = args.finish().map_err(|e| format!("{:?}", e))? {
        print!("{}", help);
        std::process::exit(0);
    }

    Ok(ListenerOptions {
        addr,
        read_timeout: read_timeout.map(Duration::from_secs),
    })
}

fn describe(request: &Request) -> String {
    let mut output = format!(
        "Request line:\n- Method: {}\n- Target: {}\n- Version: {}\nHeaders:\n",
        request.request_line.method,
        request.request_line.target,
        request.request_line.version
    );
    let mut headers = request.headers.iter().collect::<Vec<_>>();
    headers.sort_unstable();
    for (name, value) in headers {
        output.push_str(&format!("- {}: {}\n", name, value));
    }
    output
}

fn handle_connection(stream: TcpStream) {
    let peer = stream.peer_addr()
        .map_or_else(|_| String::from("unknown peer"), |addr| addr.to_string());
    log::info!("connection established with {}", peer);
    match httpreq::request_from_reader(&stream) {
        Ok(request) => print!("{}", describe(&request)),
        Err(error) => log::error!("{}: {}", peer, error),
    }
    log::info!("connection with {} closed", peer);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    let options = parse_args()?;

    let listener = TcpListener::bind(&options.addr)?;
    log::info!("listening on {}", listener.local_addr()?);

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(stream) => stream,
            Err(error) => {
                log::error!("unable to accept connection: {}", error);
                break;
            },
        };
        if let Err(error) = stream.set_read_timeout(options.read_timeout) {
            log::warn!("unable to set read timeout: {}", error);
        }
        thread::spawn(move || handle_connection(stream));
    }
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn describe_lists_request_line_and_sorted_headers() {
        let request = httpreq::request_from_reader(
            &b"GET /coffee HTTP/1.1\r\nUser-Agent: curl/7.81.0\r\nHost: localhost:42069\r\n\r\n"[..]
        ).unwrap();
        assert_eq!(
            concat!(
                "Request line:\n",
                "- Method: GET\n",
                "- Target: /coffee\n",
                "- Version: 1.1\n",
                "Headers:\n",
                "- host: localhost:42069\n",
                "- user-agent: curl/7.81.0\n",
            ),
            describe(&request)
        );
    }

    #[test]
    fn parse_one_request_over_loopback() {
        use std::io::Write;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let client = thread::spawn(move || {
            let mut stream = TcpStream::connect(addr).unwrap();
            for piece in &["GET /tea", "pot HTTP/1.1\r\nHo", "st: x\r\n", "\r\n"] {
                stream.write_all(piece.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
        });
        let (stream, _) = listener.accept().unwrap();
        let request = httpreq::request_from_reader(&stream).unwrap();
        client.join().unwrap();
        assert_eq!("/teapot", request.request_line.target);
        assert_eq!(Some("x"), request.headers.get("host"));
    }

}
