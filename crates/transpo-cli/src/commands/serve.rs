use crate::app::AppContext;
use crate::cli::ServeArgs;
use crate::web;

pub fn handle_serve(ctx: &AppContext, args: &ServeArgs) -> anyhow::Result<()> {
    let mut config = ctx.config()?.clone();
    if let Some(bind) = &args.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    let addr = config.listen_addr();

    if !ctx.quiet() {
        println!("Serving the encryption form at http://{}", addr);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(web::serve(&addr))
}
