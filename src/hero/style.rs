pub const HERO_CSS: &str = r#"
    .hero-section {
        --primary: 217 91% 60%;
        --accent: 262 83% 58%;
        --background: 222 47% 6%;
        --foreground: 210 40% 98%;
        --muted-foreground: 215 20% 65%;
        --border: 217 33% 20%;
        position: relative;
        min-height: 100vh;
        overflow: hidden;
        background: hsl(var(--background));
        color: hsl(var(--foreground));
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }

    .hero-particles,
    .hero-pattern {
        position: absolute;
        inset: 0;
        pointer-events: none;
    }

    .hero-pattern-dots {
        background-image: radial-gradient(circle at center, hsl(var(--primary)) 0.5px, transparent 0.5px);
        background-size: 16px 16px;
        opacity: 0.03;
    }

    .hero-pattern-grid {
        background-image:
            linear-gradient(to right, hsl(var(--border)) 1px, transparent 1px),
            linear-gradient(to bottom, hsl(var(--border)) 1px, transparent 1px);
        background-size: 64px 64px;
    }

    .hero-pattern-gradient {
        background: linear-gradient(to bottom right, hsl(var(--primary) / 0.03), transparent, hsl(var(--accent) / 0.05));
    }

    .hero-orb-track {
        position: absolute;
        left: 25%;
        top: 25%;
        width: 24rem;
        height: 24rem;
        pointer-events: none;
    }

    .hero-orb {
        border-radius: 9999px;
        filter: blur(64px);
        pointer-events: none;
        will-change: transform;
    }

    .hero-orb-primary {
        width: 100%;
        height: 100%;
        background: hsl(var(--primary) / 0.03);
    }

    .hero-orb-secondary {
        position: absolute;
        right: 25%;
        bottom: 25%;
        width: 24rem;
        height: 24rem;
        background: hsl(var(--accent) / 0.03);
    }

    .hero-container {
        position: relative;
        z-index: 10;
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 1rem;
    }

    .hero-content {
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        min-height: 100vh;
        padding: 5rem 0;
        text-align: center;
    }

    .hero-muted {
        color: hsl(var(--muted-foreground));
    }

    .hero-badge-wrap {
        display: inline-flex;
        margin-bottom: 2rem;
    }

    .hero-badge,
    .hero-pill {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        border: 1px solid hsl(var(--border));
        border-radius: 9999px;
        background: hsl(var(--background) / 0.5);
        backdrop-filter: blur(4px);
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
    }

    .hero-badge {
        animation: hero-pulse 2s infinite;
    }

    .hero-badge-icon {
        display: inline-flex;
        animation: hero-spin 2s linear infinite;
    }

    .icon {
        width: 1rem;
        height: 1rem;
        flex-shrink: 0;
    }

    .hero-icon-primary {
        color: hsl(var(--primary));
    }

    .hero-countdown {
        margin-bottom: 1.5rem;
    }

    .hero-countdown-live {
        color: hsl(var(--primary));
        font-weight: 700;
    }

    .hero-countdown-pending {
        display: flex;
        align-items: center;
        gap: 1rem;
        font-size: 0.875rem;
    }

    .hero-countdown-parts {
        display: flex;
        gap: 0.5rem;
    }

    .hero-countdown-part {
        border-radius: 0.25rem;
        background: hsl(var(--primary) / 0.1);
        padding: 0.25rem 0.5rem;
        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        font-weight: 700;
        color: hsl(var(--primary));
    }

    .hero-title {
        max-width: 56rem;
        margin: 0;
        font-size: clamp(3rem, 7vw, 4.5rem);
        font-weight: 700;
        letter-spacing: -0.025em;
        line-height: 1.1;
    }

    .hero-title-line {
        display: block;
    }

    .hero-title-highlight-wrap {
        position: relative;
        display: block;
        margin-top: 0.5rem;
        margin-left: 0.75rem;
    }

    .hero-gradient-text {
        background: linear-gradient(to right, hsl(var(--primary)), hsl(var(--primary) / 0.8), hsl(var(--accent)));
        -webkit-background-clip: text;
        background-clip: text;
        -webkit-text-fill-color: transparent;
    }

    .hero-star {
        position: absolute;
        right: -0.5rem;
        top: -0.5rem;
        width: 1.5rem;
        height: 1.5rem;
        color: hsl(var(--primary) / 0.6);
        animation: hero-wiggle 2s 1s infinite;
    }

    .hero-typed {
        margin-top: 1rem;
        height: 2rem;
    }

    .hero-typed-text {
        font-size: 1.25rem;
        font-weight: 600;
        color: hsl(var(--primary));
    }

    .typed-cursor {
        margin-left: 1px;
        animation: hero-blink 0.7s infinite;
    }

    .hero-subtitle {
        max-width: 42rem;
        margin: 1.5rem 0 0;
        font-size: 1.125rem;
        line-height: 1.7;
        color: hsl(var(--muted-foreground));
    }

    .hero-features {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        margin-top: 2rem;
    }

    .hero-pill {
        transition: background 0.2s, transform 0.2s;
    }

    .hero-pill:hover {
        background: hsl(var(--background) / 0.7);
        transform: scale(1.05) translateY(-2px);
    }

    .hero-actions {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        margin-top: 2.5rem;
    }

    @media (min-width: 640px) {
        .hero-actions {
            flex-direction: row;
        }
    }

    .hero-button {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        border-radius: 0.5rem;
        padding: 0.75rem 2rem;
        font-size: 1rem;
        font-weight: 500;
        cursor: pointer;
        transition: transform 0.15s, box-shadow 0.2s, background 0.2s;
    }

    .hero-button:hover {
        transform: scale(1.05);
    }

    .hero-button:active {
        transform: scale(0.95);
    }

    .hero-button-primary {
        border: none;
        background: hsl(var(--primary));
        color: hsl(var(--background));
        box-shadow: 0 10px 15px -3px hsl(var(--primary) / 0.2);
    }

    .hero-button-primary:hover {
        box-shadow: 0 20px 25px -5px hsl(var(--primary) / 0.3);
    }

    .hero-button-arrow {
        width: 1.25rem;
        height: 1.25rem;
        transition: transform 0.2s;
    }

    .hero-button-primary:hover .hero-button-arrow {
        transform: translateX(4px);
    }

    .hero-button-outline {
        border: 1px solid hsl(var(--border) / 0.5);
        background: transparent;
        color: inherit;
        backdrop-filter: blur(4px);
    }

    .hero-button-outline:hover {
        background: hsl(var(--background) / 0.5);
    }

    .hero-trusted {
        width: 100%;
        max-width: 56rem;
        margin-top: 5rem;
    }

    .hero-trusted-label {
        margin-bottom: 1.5rem;
        font-size: 0.875rem;
        color: hsl(var(--muted-foreground));
    }

    .hero-logos {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: center;
        gap: 2rem;
        opacity: 0.5;
        filter: grayscale(1);
        transition: all 0.5s;
    }

    .hero-logos:hover {
        opacity: 0.7;
        filter: grayscale(0);
    }

    .hero-logo-placeholder {
        width: 6rem;
        height: 2rem;
        border-radius: 0.25rem;
        background: linear-gradient(to right, hsl(var(--muted-foreground) / 0.1), hsl(var(--muted-foreground) / 0.05));
        transition: transform 0.2s;
    }

    .hero-logo-placeholder:hover {
        transform: scale(1.1);
    }

    .hero-scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
    }

    .hero-scroll-link {
        color: hsl(var(--muted-foreground));
        text-decoration: none;
        cursor: pointer;
        transition: color 0.2s;
    }

    .hero-scroll-link:hover {
        color: hsl(var(--primary));
    }

    .hero-scroll-bounce {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        animation: hero-bounce 1.5s infinite;
    }

    .hero-scroll-label {
        font-size: 0.75rem;
    }

    .hero-scroll-arrow {
        transform: rotate(90deg);
    }

    /* Entrance animations. `backwards` so hover transforms win afterwards. */
    .hero-fade { animation: hero-fade-in 0.6s ease-out backwards; }
    .hero-rise { animation: hero-rise-in 0.6s ease-out backwards; }
    .hero-pop { animation: hero-pop-in 0.6s ease-out backwards; }
    .hero-drop { animation: hero-drop-in 0.6s ease-out backwards; }

    @keyframes hero-fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes hero-rise-in {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes hero-pop-in {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes hero-drop-in {
        from { opacity: 0; transform: translate(-50%, -10px); }
        to { opacity: 1; transform: translate(-50%, 0); }
    }
    @keyframes hero-pulse {
        0% { box-shadow: 0 0 0 0 hsl(var(--primary) / 0); }
        50% { box-shadow: 0 0 0 10px hsl(var(--primary) / 0.1); }
        100% { box-shadow: 0 0 0 0 hsl(var(--primary) / 0); }
    }
    @keyframes hero-spin {
        to { transform: rotate(360deg); }
    }
    @keyframes hero-wiggle {
        0%, 100% { transform: rotate(0deg); }
        33% { transform: rotate(10deg); }
        66% { transform: rotate(-10deg); }
    }
    @keyframes hero-bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(5px); }
    }
    @keyframes hero-blink {
        50% { opacity: 0; }
    }

    @media (prefers-reduced-motion: reduce) {
        .hero-section *,
        .hero-section *::before {
            animation: none !important;
            transition: none !important;
        }
    }
"#;
