use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use xinge::{options, Authenticator, Client, ClientOptions, Endpoint, RequestOption};

// An example client pushing a notification to a single account
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt().init();

    let mut app_id = String::new();
    let mut secret_key = String::new();
    let mut account = String::new();
    let mut title = String::from("Hello");
    let mut message = String::from("Ch-check it out!");
    let mut android = false;
    let mut dev = false;
    let mut url: Option<String> = None;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Xinge single account push");
        ap.refer(&mut app_id)
            .add_option(&["-i", "--app_id"], Store, "Xinge application id");
        ap.refer(&mut secret_key)
            .add_option(&["-k", "--secret_key"], Store, "Xinge secret key");
        ap.refer(&mut account)
            .add_option(&["-a", "--account"], Store, "Account to push to");
        ap.refer(&mut title)
            .add_option(&["-t", "--title"], Store, "Notification title");
        ap.refer(&mut message)
            .add_option(&["-m", "--message"], Store, "Notification message");
        ap.refer(&mut android)
            .add_option(&["--android"], StoreTrue, "Push to an Android account instead of iOS");
        ap.refer(&mut dev)
            .add_option(&["-d", "--dev"], StoreTrue, "Use the iOS development environment");
        ap.refer(&mut url)
            .add_option(&["-u", "--url"], StoreOption, "Push API URL");
        ap.parse_args_or_exit();
    }

    // Which URL to call, the official one or a proxy?
    let endpoint = match url {
        Some(url) => Endpoint::Custom(url),
        None => Endpoint::Production,
    };

    let client = Client::new(
        ClientOptions::new(endpoint).with_authenticator(Authenticator::new(app_id, secret_key)),
    );

    let mut push_options: Vec<RequestOption> = vec![options::seq(1)];
    if dev && !android {
        push_options.push(options::env_dev());
    }

    let builder = client.request_builder();
    let request = if android {
        builder.single_android_account(account, title, message, push_options)?
    } else {
        builder.single_ios_account(account, title, message, push_options)?
    };

    // Send the push, print the response
    match client.send(request).await {
        Ok(response) if response.ret_code == 0 => println!("Sent: {:?}", response),
        Ok(response) => println!("Rejected: {:?}", response),
        Err(error) => println!("Error: {:?}", error),
    };

    Ok(())
}
